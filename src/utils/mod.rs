//! Utility modules for the Campo application.
//!
//! Common helpers used throughout the application, currently limited to
//! date handling.
//!
//! - [`datetime`] - Date formatting, parsing, and validation-range helpers

pub mod datetime;
