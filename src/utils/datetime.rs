//! Date utility functions
//!
//! Date parsing and formatting for form input and display. Dates travel as
//! `YYYY-MM-DD` strings on the wire and in dialog input fields.

use chrono::{Local, NaiveDate};

/// Standard date format used throughout the application
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Historical floor for report and outing dates. The original records of the
/// organization do not predate this.
pub fn fecha_minima() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default()
}

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Current local calendar date. "Today" for date validation purposes.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether `d` lies within the accepted range for report/outing dates:
/// `[fecha_minima(), today]`, both endpoints inclusive.
pub fn within_accepted_range(d: NaiveDate, today: NaiveDate) -> bool {
    d >= fecha_minima() && d <= today
}
