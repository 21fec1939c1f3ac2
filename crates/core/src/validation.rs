//! Shared request validation helpers.
//!
//! Provides presence checks and parsers for the loosely-typed values clients
//! send (times, dates, nutrition figures).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::CoreError;

/// Accepted reminder time layouts.
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Accepted appointment time layouts (besides RFC 3339).
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Whether an optional string field carries a non-blank value.
pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Fail with `message` unless every flag is set.
pub fn require_present(present: &[bool], message: &str) -> Result<(), CoreError> {
    if present.iter().all(|p| *p) {
        Ok(())
    } else {
        Err(CoreError::Validation(message.to_string()))
    }
}

/// Return the value of a required string field or fail with `message`.
pub fn required<'a>(value: &'a Option<String>, message: &str) -> Result<&'a str, CoreError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::Validation(message.to_string())),
    }
}

/// Parse a reminder time given as `HH:MM` or `HH:MM:SS`.
pub fn parse_reminder_time(value: &str) -> Result<NaiveTime, CoreError> {
    let value = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| {
            CoreError::Validation(format!("time must be HH:MM or HH:MM:SS, got '{value}'"))
        })
}

/// Parse an appointment time.
///
/// RFC 3339 values are converted to their naive UTC wall-clock time; local
/// `datetime-local` style values are stored as given.
pub fn parse_appointment_time(value: &str) -> Result<NaiveDateTime, CoreError> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "appointment_time must be a date and time (YYYY-MM-DDTHH:MM), got '{value}'"
            ))
        })
}

/// Parse a calendar date given as `YYYY-MM-DD`.
pub fn parse_date(value: &str, name: &str) -> Result<NaiveDate, CoreError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        CoreError::Validation(format!("{name} must be a date (YYYY-MM-DD), got '{value}'"))
    })
}

/// Validate that a date range does not end before it starts.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), CoreError> {
    if end < start {
        return Err(CoreError::Validation(format!(
            "end_date ({end}) must not be before start_date ({start})"
        )));
    }
    Ok(())
}

/// Validate that an optional figure is not negative.
pub fn validate_non_negative(value: Option<f64>, name: &str) -> Result<(), CoreError> {
    match value {
        Some(v) if v < 0.0 || !v.is_finite() => Err(CoreError::Validation(format!(
            "{name} must be a non-negative number, got {v}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn presence_checks() {
        assert!(is_present(&Some("x".into())));
        assert!(!is_present(&Some("   ".into())));
        assert!(!is_present(&None));

        assert!(require_present(&[true, true], "All fields required").is_ok());
        assert_matches!(
            require_present(&[true, false], "All fields required"),
            Err(CoreError::Validation(msg)) if msg == "All fields required"
        );
    }

    #[test]
    fn required_returns_value() {
        assert_eq!(required(&Some("abc".into()), "missing").unwrap(), "abc");
        assert!(required(&Some(String::new()), "missing").is_err());
    }

    #[test]
    fn reminder_time_formats() {
        assert_eq!(
            parse_reminder_time("08:30").unwrap(),
            NaiveTime::from_hms_opt(8, 30, 0).unwrap()
        );
        assert_eq!(
            parse_reminder_time("21:05:10").unwrap(),
            NaiveTime::from_hms_opt(21, 5, 10).unwrap()
        );
        assert!(parse_reminder_time("25:00").is_err());
        assert!(parse_reminder_time("noon").is_err());
    }

    #[test]
    fn appointment_time_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        assert_eq!(parse_appointment_time("2025-06-01T10:00").unwrap(), expected);
        assert_eq!(parse_appointment_time("2025-06-01 10:00:00").unwrap(), expected);
        assert_eq!(
            parse_appointment_time("2025-06-01T12:00:00+02:00").unwrap(),
            expected
        );
        assert!(parse_appointment_time("tomorrow").is_err());
    }

    #[test]
    fn date_parsing() {
        assert_eq!(
            parse_date(" 2025-02-28 ", "start_date").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert_matches!(
            parse_date("2025-02-30", "start_date"),
            Err(CoreError::Validation(msg)) if msg.starts_with("start_date")
        );
        assert!(parse_date("28/02/2025", "end_date").is_err());
    }

    #[test]
    fn date_range() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert!(validate_date_range(start, end).is_ok());
        assert!(validate_date_range(start, start).is_ok());
        assert!(validate_date_range(end, start).is_err());
    }

    #[test]
    fn non_negative() {
        assert!(validate_non_negative(None, "carbs").is_ok());
        assert!(validate_non_negative(Some(0.0), "carbs").is_ok());
        assert!(validate_non_negative(Some(-1.0), "carbs").is_err());
        assert!(validate_non_negative(Some(f64::NAN), "carbs").is_err());
    }
}
