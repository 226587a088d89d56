//! Core UI functionality for the Campo application.
//!
//! The fundamental building blocks every component builds upon:
//!
//! - [`actions`] - Action definitions, dialog types, and panel/resource tags
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//! - [`form`] - Dialog form state and local validation
//! - [`modal`] - Process-wide modal state (one dialog open at most)
//! - [`route`] - Route parameters and their normalization
//! - [`task_manager`] - Background mutations and data loads

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod form;
pub mod modal;
pub mod route;
pub mod task_manager;

pub use actions::{Action, DialogKind, DialogType, Notice, NoticeKind, PanelKind, ResourceKind};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use form::{FieldId, FormState};
pub use modal::ModalState;
pub use route::{ParamValue, RouteParams};
pub use task_manager::{TaskId, TaskManager, TaskResult};
