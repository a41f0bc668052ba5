//! Conversion between display dates (`DD.MM.YYYY`) and canonical storage
//! dates (`YYYY-MM-DD`).

use crate::error::{ExamError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Format string for canonical storage dates
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

fn display_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").unwrap())
}

/// Convert a display date into its canonical form.
///
/// Day and month are zero-padded to two digits. Calendar validity is not
/// checked here; use [`is_valid_display_date`] for that.
pub fn to_canonical(display: &str) -> Result<String> {
    let parts: Vec<&str> = display.split('.').collect();
    if parts.len() != 3 {
        return Err(ExamError::InvalidFormat(display.to_string()));
    }

    let day = format!("{:0>2}", parts[0]);
    let month = format!("{:0>2}", parts[1]);
    let year = parts[2];

    Ok(format!("{}-{}-{}", year, month, day))
}

/// Convert a canonical date into its display form.
///
/// Malformed input is returned unchanged so legacy data still renders.
pub fn to_display(canonical: &str) -> String {
    let parts: Vec<&str> = canonical.split('-').collect();
    if parts.len() != 3 {
        return canonical.to_string();
    }

    format!("{}.{}.{}", parts[2], parts[1], parts[0])
}

/// Check that a display date has the strict `DD.MM.YYYY` shape and names a
/// real calendar day.
pub fn is_valid_display_date(display: &str) -> bool {
    if !display_date_regex().is_match(display) {
        return false;
    }

    to_canonical(display)
        .ok()
        .and_then(|canonical| parse_canonical(&canonical))
        .is_some()
}

/// Parse a canonical date string, returning `None` for malformed values.
pub fn parse_canonical(canonical: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(canonical, CANONICAL_FORMAT).ok()
}
