//! Date-string normalization into the canonical GVX timestamp pattern
//!
//! Source records carry dates in whatever layout the originating software
//! produced: rearranged but complete timestamps, bare years, compact
//! `YYYYMMDDhhmmss` runs, and so on. The normalizer reconciles all of them
//! into `YYYY-MM-DDThh:mm:ss.ss`, filling unspecified components according
//! to a boundary mode so that, for example, a project start date of "2021"
//! becomes the first instant of 2021 and an end date the last one.

use chrono::NaiveDateTime;

/// Canonical stand-in for all-zero date runs.
const DEFAULT_INSTANT: &str = "0001-01-01T00:00:00.00";

/// How unspecified date-time components are filled during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Fill missing components with their minimum values
    Floor,
    /// Fill missing time components toward their maximum values
    Ceiling,
}

/// Outcome of a normalization attempt.
///
/// Normalization never fails with an error; an input whose stripped form has
/// an unrecognized length is handed back unchanged as [`Unrecognized`] and
/// the caller decides what to do with it.
///
/// [`Unrecognized`]: NormalizedDate::Unrecognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedDate {
    /// Input was reconciled into the canonical pattern
    Canonical(String),
    /// The stripped input could not be interpreted; returned as-is
    Unrecognized(String),
}

impl NormalizedDate {
    /// Returns true if normalization produced a canonical timestamp.
    pub fn is_canonical(&self) -> bool {
        matches!(self, NormalizedDate::Canonical(_))
    }

    /// Unwraps to the inner string, canonical or not.
    pub fn into_inner(self) -> String {
        match self {
            NormalizedDate::Canonical(s) | NormalizedDate::Unrecognized(s) => s,
        }
    }
}

/// Normalizes an arbitrary-format date-time string into the canonical
/// pattern, filling unsupplied components per `boundary`.
///
/// Recognized inputs are, in order of preference:
/// 1. month-first timestamps `MM-DD-YYYYTHH:MM:SS.00` and
///    `MM-DD-YYYY HH:MM:SS`, which are rearranged directly;
/// 2. runs of 4, 6, 8, 10, 12, 14, or 16 alphanumeric characters after
///    stripping, read left-to-right as year, month, day, hour, minute,
///    second, and hundredths.
///
/// An all-zero run of length 4, 6, or 8 maps to `0001-01-01T00:00:00.00`
/// in floor mode.
pub fn normalize_date(raw: &str, boundary: Boundary) -> NormalizedDate {
    // Complete timestamps sometimes arrive month-first; rearrange them
    // without touching the component values.
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%m-%d-%YT%H:%M:%S.00") {
        return NormalizedDate::Canonical(dt.format("%Y-%m-%dT%H:%M:%S.00").to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%m-%d-%Y %H:%M:%S") {
        return NormalizedDate::Canonical(dt.format("%Y-%m-%dT%H:%M:%S.00").to_string());
    }

    let run: String = raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    let len = run.len();

    if !matches!(len, 4 | 6 | 8 | 10 | 12 | 14 | 16) {
        return NormalizedDate::Unrecognized(run);
    }

    if boundary == Boundary::Floor && len <= 8 && run.bytes().all(|b| b == b'0') {
        return NormalizedDate::Canonical(DEFAULT_INSTANT.to_string());
    }

    let (hour_fill, minute_fill, second_fill) = match boundary {
        Boundary::Floor => ("00", "00", "00"),
        Boundary::Ceiling => ("23", "59", "59"),
    };

    // Take the component from the run when it was supplied, the fill
    // value otherwise.
    let component = |start: usize, end: usize, fill: &str| -> String {
        if len >= end {
            run[start..end].to_string()
        } else {
            fill.to_string()
        }
    };

    let year = run[0..4].to_string();
    let month = component(4, 6, "01");
    let day = component(6, 8, "01");
    let hour = component(8, 10, hour_fill);
    let minute = component(10, 12, minute_fill);
    let second = component(12, 14, second_fill);
    let fraction = component(14, 16, "00");

    NormalizedDate::Canonical(format!(
        "{year}-{month}-{day}T{hour}:{minute}:{second}.{fraction}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor(raw: &str) -> NormalizedDate {
        normalize_date(raw, Boundary::Floor)
    }

    fn ceiling(raw: &str) -> NormalizedDate {
        normalize_date(raw, Boundary::Ceiling)
    }

    #[test]
    fn test_month_first_timestamp_is_rearranged() {
        assert_eq!(
            floor("06-15-2021T08:30:00.00"),
            NormalizedDate::Canonical("2021-06-15T08:30:00.00".to_string())
        );
        assert_eq!(
            floor("06-15-2021 08:30:45"),
            NormalizedDate::Canonical("2021-06-15T08:30:45.00".to_string())
        );
    }

    #[test]
    fn test_floor_fills_with_minimums() {
        assert_eq!(
            floor("2021"),
            NormalizedDate::Canonical("2021-01-01T00:00:00.00".to_string())
        );
        assert_eq!(
            floor("202101"),
            NormalizedDate::Canonical("2021-01-01T00:00:00.00".to_string())
        );
        assert_eq!(
            floor("20210615"),
            NormalizedDate::Canonical("2021-06-15T00:00:00.00".to_string())
        );
        assert_eq!(
            floor("2021061508"),
            NormalizedDate::Canonical("2021-06-15T08:00:00.00".to_string())
        );
        assert_eq!(
            floor("202106150830"),
            NormalizedDate::Canonical("2021-06-15T08:30:00.00".to_string())
        );
        assert_eq!(
            floor("20210615083045"),
            NormalizedDate::Canonical("2021-06-15T08:30:45.00".to_string())
        );
        assert_eq!(
            floor("2021061508304550"),
            NormalizedDate::Canonical("2021-06-15T08:30:45.50".to_string())
        );
    }

    #[test]
    fn test_ceiling_fills_toward_maximums() {
        assert_eq!(
            ceiling("2021"),
            NormalizedDate::Canonical("2021-01-01T23:59:59.00".to_string())
        );
        assert_eq!(
            ceiling("202112"),
            NormalizedDate::Canonical("2021-12-01T23:59:59.00".to_string())
        );
        assert_eq!(
            ceiling("20211231"),
            NormalizedDate::Canonical("2021-12-31T23:59:59.00".to_string())
        );
        assert_eq!(
            ceiling("2021123118"),
            NormalizedDate::Canonical("2021-12-31T18:59:59.00".to_string())
        );
        assert_eq!(
            ceiling("20211231083045"),
            NormalizedDate::Canonical("2021-12-31T08:30:45.00".to_string())
        );
        assert_eq!(
            ceiling("2021123108304575"),
            NormalizedDate::Canonical("2021-12-31T08:30:45.75".to_string())
        );
    }

    #[test]
    fn test_all_zero_run_maps_to_default_instant_in_floor_mode() {
        for zeros in ["0000", "000000", "00000000"] {
            assert_eq!(
                floor(zeros),
                NormalizedDate::Canonical("0001-01-01T00:00:00.00".to_string()),
                "input {zeros:?}"
            );
        }
        // Ceiling mode reads the zeros as literal components.
        assert_eq!(
            ceiling("0000"),
            NormalizedDate::Canonical("0000-01-01T23:59:59.00".to_string())
        );
    }

    #[test]
    fn test_separators_are_stripped_before_dispatch() {
        assert_eq!(
            floor("2021/06/15"),
            NormalizedDate::Canonical("2021-06-15T00:00:00.00".to_string())
        );
        assert_eq!(
            floor("2021-06"),
            NormalizedDate::Canonical("2021-06-01T00:00:00.00".to_string())
        );
    }

    #[test]
    fn test_unrecognized_length_passes_through_stripped() {
        assert_eq!(
            floor("20216"),
            NormalizedDate::Unrecognized("20216".to_string())
        );
        assert_eq!(floor(""), NormalizedDate::Unrecognized(String::new()));
        // Stripping happens before the length check.
        assert_eq!(
            floor("20-216"),
            NormalizedDate::Unrecognized("20216".to_string())
        );
        assert!(!floor("202").is_canonical());
        assert!(!ceiling("123456789").is_canonical());
    }

    #[test]
    fn test_deterministic() {
        let a = floor("20210615");
        let b = floor("20210615");
        assert_eq!(a, b);
    }
}
