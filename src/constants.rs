//! Constants used throughout the application
//!
//! This module centralizes magic strings, user-facing text, and other constant
//! values to improve maintainability and consistency. User-facing text is in
//! Spanish, matching the locale of the organization this console serves.

// Success notices
pub const SUCCESS_GRUPO_CREATED: &str = "Grupo creado correctamente.";
pub const SUCCESS_GRUPO_UPDATED: &str = "Grupo actualizado.";
pub const SUCCESS_GRUPO_DELETED: &str = "Grupo eliminado.";
pub const SUCCESS_MISIONERO_CREATED: &str = "Misionero creado correctamente.";
pub const SUCCESS_MISIONERO_UPDATED: &str = "Misionero actualizado.";
pub const SUCCESS_MISIONERO_DELETED: &str = "Misionero eliminado.";
pub const SUCCESS_SALIDA_CREATED: &str = "Salida creada correctamente.";
pub const SUCCESS_SALIDA_UPDATED: &str = "Salida actualizada.";
pub const SUCCESS_SALIDA_DELETED: &str = "Salida eliminada.";
pub const SUCCESS_INFORME_CREATED: &str = "Informe creado correctamente.";
pub const SUCCESS_INFORME_UPDATED: &str = "Informe actualizado.";
pub const SUCCESS_INFORME_DELETED: &str = "Informe eliminado.";

// Failure notice shown for any mutation error; the detail goes to the logs
pub const ERROR_GENERIC: &str = "Algo ha ido mal.";

// Validation messages, surfaced inline next to the offending field
pub const VALIDATION_REQUIRED: &str = "Este campo es requerido";
pub const VALIDATION_MIN_LENGTH: &str = "Mínimo 2 caracteres";
pub const VALIDATION_FECHA_REQUIRED: &str = "La fecha es requerida";
pub const VALIDATION_FECHA_INVALID: &str = "Fecha inválida (AAAA-MM-DD)";
pub const VALIDATION_FECHA_FUTURE: &str = "La fecha no puede ser futura";
pub const VALIDATION_FECHA_TOO_OLD: &str = "La fecha es demasiado antigua";

// UI messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const ERROR_NO_API_URL: &str = "Error: no API base URL configured (set CAMPO_API_URL or api.base_url)";
pub const DIALOG_TITLE_LOGS: &str = "Registro - Press 'Esc', 'G' or 'q' to close";

// Durable UI-state storage keys
/// Key under which the per-device "attendance taken" flag is stored.
pub const ASISTENCIA_TOMADA_KEY: &str = "asistenciaTomada";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;
