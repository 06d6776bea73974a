//! String format predicates for GVX field values
//!
//! Field values arrive as text and are rendered as text; these predicates
//! decide whether a value may be committed to a numeric or datetime field.
//! All of them are total: any input yields a plain `bool`.

use chrono::NaiveDateTime;

use crate::error::ValueKind;

/// Returns true if `text` is exactly a signed or unsigned whole-number
/// literal (no decimal point, no thousands separators).
pub fn is_integer(text: &str) -> bool {
    text.parse::<i64>().is_ok()
}

/// Returns true if `text` parses as a floating-point number.
pub fn is_real(text: &str) -> bool {
    text.parse::<f64>().is_ok()
}

/// Returns true if `text` matches the canonical GVX timestamp pattern
/// `YYYY-MM-DDThh:mm:ss.ss` exactly. The fraction separator is mandatory
/// and carries one to six digits.
pub fn is_datetime(text: &str) -> bool {
    let Some((stamp, fraction)) = text.rsplit_once('.') else {
        return false;
    };
    if fraction.is_empty() || fraction.len() > 6 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S").is_ok()
}

impl ValueKind {
    /// Runs the predicate for this kind against `text`.
    pub fn check(self, text: &str) -> bool {
        match self {
            ValueKind::Integer => is_integer(text),
            ValueKind::Real => is_real(text),
            ValueKind::DateTime => is_datetime(text),
        }
    }
}
