//! Dialog render helpers.
//!
//! The dialog component decides *which* dialog is open and holds its state;
//! these modules only draw. `common` carries the shared building blocks,
//! `form_dialogs` the create/edit forms, `system_dialogs` the confirmation,
//! message, help, and logs overlays.

pub mod common;
pub mod form_dialogs;
pub mod system_dialogs;
