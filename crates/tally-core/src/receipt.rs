//! # Receipt Formatting
//!
//! Receipt number generation and date formatting as pure functions.
//! The clock is always a parameter; the application shell passes
//! `Utc::now()` so these stay deterministic under test.

use chrono::{DateTime, Utc};

/// Generates a receipt number: `"<prefix>-<unix-seconds>"`.
///
/// Sales recorded in different seconds get distinct numbers; a
/// single-terminal store cannot finalize two sales within one second.
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use tally_core::receipt::receipt_number;
///
/// let time = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
/// assert_eq!(receipt_number("TALLY-POS", time), "TALLY-POS-1700000000");
/// ```
pub fn receipt_number(prefix: &str, time: DateTime<Utc>) -> String {
    format!("{}-{}", prefix, time.timestamp())
}

/// Formats the date/time line printed on the receipt: `dd/mm/yy HH:MM`.
pub fn format_receipt_date(time: DateTime<Utc>) -> String {
    time.format("%d/%m/%y %H:%M").to_string()
}
