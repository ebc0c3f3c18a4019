use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parse a deadline. Accepts RFC 3339, a naive date-time (read as UTC), or a
/// bare date (midnight UTC).
pub fn parse_deadline(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    anyhow::bail!(
        "invalid deadline '{raw}': expected RFC 3339, YYYY-MM-DDTHH:MM, YYYY-MM-DD HH:MM, or YYYY-MM-DD"
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use tf_core::enums::{Priority, TaskStatus};

    use super::{parse_deadline, parse_enum};

    #[test]
    fn parses_snake_case_enum() {
        let status: TaskStatus = parse_enum("paused", "status").expect("status should parse");
        assert_eq!(status, TaskStatus::Paused);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let status: TaskStatus =
            parse_enum("in-progress", "status").expect("status should parse");
        assert_eq!(status, TaskStatus::InProgress);
        let priority: Priority = parse_enum("HIGH", "priority").expect("priority should parse");
        assert_eq!(priority, Priority::High);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<TaskStatus>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }

    #[test]
    fn deadline_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 3, 1, 17, 30, 0).unwrap();
        assert_eq!(parse_deadline("2026-03-01T17:30:00Z").unwrap(), expected);
        assert_eq!(parse_deadline("2026-03-01T18:30:00+01:00").unwrap(), expected);
        assert_eq!(parse_deadline("2026-03-01T17:30").unwrap(), expected);
        assert_eq!(parse_deadline("2026-03-01 17:30").unwrap(), expected);
        assert_eq!(
            parse_deadline("2026-03-01").unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn deadline_rejects_garbage() {
        let err = parse_deadline("next tuesday").expect_err("should fail");
        assert!(err.to_string().contains("invalid deadline"));
    }
}
