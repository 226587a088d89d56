//! Campo - a terminal admin console for missionary group field work
//!
//! This library provides a terminal-based interface for managing the
//! resources of a missionary-group organization: grupos, misioneros,
//! salidas, and informes. All data lives behind a REST backend; the console
//! lists it, mutates it through modal dialogs, and re-fetches after every
//! successful mutation.
//!
//! # Modules
//!
//! * [`api`] - HTTP client for the resource backend
//! * [`config`] - Application configuration management
//! * [`models`] - Wire-level entity records
//! * [`ui`] - Terminal user interface components
//! * [`ui_state`] - Durable per-device UI flags
//! * [`utils`] - Date helpers

/// Resource API client and the trait seam the UI talks through
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants, user-facing text included
pub mod constants;

/// In-memory logging shown in the logs dialog
pub mod logger;

/// Wire-level entity records and mutation payloads
pub mod models;

/// Terminal user interface components and rendering
pub mod ui;

/// Durable per-device UI state (the attendance flag)
pub mod ui_state;

/// Utility functions for date handling
pub mod utils;

pub use models::{Grupo, Informe, Misionero, Salida};
