//! Tolerant incident date parsing.
//!
//! The Chicago-style extract writes timestamps as `"09/05/2015 01:30:00 PM"`;
//! Socrata-backed exports of the same dataset use ISO 8601 with or without
//! fractional seconds. All of these are accepted; anything else yields
//! `None` and the record keeps empty temporal fields.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses an incident timestamp from any of the known extract formats.
#[must_use]
pub fn parse_incident_date(s: &str) -> Option<DateTime<Utc>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Extract format with 12-hour clock: "09/05/2015 01:30:00 PM"
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%m/%d/%Y %I:%M:%S %p") {
        return Some(naive.and_utc());
    }
    // ISO 8601 with fractional seconds: "2015-09-05T13:30:00.000"
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    // ISO 8601 without fractional seconds
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    // Space-separated 24-hour variant
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_extract_format() {
        let dt = parse_incident_date("09/05/2015 01:30:00 PM").unwrap();
        assert_eq!(dt.to_string(), "2015-09-05 13:30:00 UTC");
    }

    #[test]
    fn parses_iso_with_fractional() {
        let dt = parse_incident_date("2015-09-05T13:30:00.000").unwrap();
        assert_eq!(dt.to_string(), "2015-09-05 13:30:00 UTC");
    }

    #[test]
    fn parses_iso_without_fractional() {
        let dt = parse_incident_date("2015-09-05T13:30:00").unwrap();
        assert_eq!(dt.to_string(), "2015-09-05 13:30:00 UTC");
    }

    #[test]
    fn parses_space_separated() {
        let dt = parse_incident_date("2015-09-05 13:30:00").unwrap();
        assert_eq!(dt.to_string(), "2015-09-05 13:30:00 UTC");
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert!(parse_incident_date("not-a-date").is_none());
        assert!(parse_incident_date("").is_none());
        assert!(parse_incident_date("   ").is_none());
    }
}
