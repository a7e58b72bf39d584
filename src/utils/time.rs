//! Timestamp helpers

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a timestamp as ISO-8601 UTC with millisecond precision
pub fn to_iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time, ISO-8601 formatted
pub fn now_iso8601() -> String {
    to_iso8601(&Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso8601_formatting() {
        let timestamp = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(to_iso8601(&timestamp), "2021-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_now_is_parseable() {
        let now = now_iso8601();
        assert!(now.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&now).is_ok());
    }
}
