//! Batch code derivation.
//!
//! The batch code is computed from the run date, never parsed from the
//! document: a 2-digit year followed by a 2-digit zero-padded week number.
//! Week numbering uses the Sunday-first convention (`%U`): days before the
//! year's first Sunday fall in week 00.

use chrono::NaiveDate;

/// Derive the 4-character batch code for a given date, e.g. "2511".
pub fn batch_code(date: NaiveDate) -> String {
    date.format("%y%U").to_string()
}
