//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod list_component;
pub mod sidebar_component;
pub mod status_bar;

pub use dialog_component::DialogComponent;
pub use list_component::ListComponent;
pub use sidebar_component::SidebarComponent;
pub use status_bar::StatusBar;
