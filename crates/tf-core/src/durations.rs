//! Human-facing duration formatting and deadline projection.
//!
//! Nothing here is stored state: every value is recomputed from a deadline or
//! a second count on each query.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Time left until a deadline, broken down by its largest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeRemaining {
    /// The deadline is at or before now.
    Overdue,
    Days { days: i64, hours: i64 },
    Hours { hours: i64, minutes: i64 },
    Minutes { minutes: i64 },
}

impl TimeRemaining {
    /// Project the time left from `now` until `deadline`.
    #[must_use]
    pub fn between(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff = deadline - now;
        if diff <= TimeDelta::zero() {
            return Self::Overdue;
        }

        let secs = diff.num_seconds();
        let days = secs / SECS_PER_DAY;
        let hours = (secs % SECS_PER_DAY) / SECS_PER_HOUR;
        let minutes = (secs % SECS_PER_HOUR) / SECS_PER_MINUTE;

        if days > 0 {
            Self::Days { days, hours }
        } else if hours > 0 {
            Self::Hours { hours, minutes }
        } else {
            Self::Minutes { minutes }
        }
    }

    #[must_use]
    pub const fn is_overdue(self) -> bool {
        matches!(self, Self::Overdue)
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdue => f.write_str("Overdue"),
            Self::Days { days, hours } => write!(f, "{days}d {hours}h remaining"),
            Self::Hours { hours, minutes } => write!(f, "{hours}h {minutes}m remaining"),
            Self::Minutes { minutes } => write!(f, "{minutes}m remaining"),
        }
    }
}

/// Render seconds as a zero-padded `HH:MM:SS` stopwatch reading.
#[must_use]
pub fn format_clock(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Render seconds as `Xh Ym`, dropping leftover seconds.
#[must_use]
pub fn format_hours_minutes(secs: u64) -> String {
    format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    #[rstest]
    #[case(TimeDelta::hours(-1), "Overdue")]
    #[case(TimeDelta::zero(), "Overdue")]
    #[case(TimeDelta::minutes(90), "1h 30m remaining")]
    #[case(TimeDelta::minutes(5), "5m remaining")]
    #[case(TimeDelta::seconds(30), "0m remaining")]
    #[case(TimeDelta::hours(27), "1d 3h remaining")]
    #[case(TimeDelta::days(2) + TimeDelta::minutes(59), "2d 0h remaining")]
    #[case(TimeDelta::hours(1), "1h 0m remaining")]
    fn remaining_strings(#[case] offset: TimeDelta, #[case] expected: &str) {
        let remaining = TimeRemaining::between(now() + offset, now());
        assert_eq!(remaining.to_string(), expected);
    }

    #[test]
    fn overdue_flag() {
        assert!(TimeRemaining::between(now(), now()).is_overdue());
        assert!(!TimeRemaining::between(now() + TimeDelta::seconds(1), now()).is_overdue());
    }

    #[test]
    fn remaining_serializes_tagged() {
        let json = serde_json::to_value(TimeRemaining::Hours { hours: 1, minutes: 30 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "hours", "hours": 1, "minutes": 30}));
    }

    #[rstest]
    #[case(0, "00:00:00")]
    #[case(59, "00:00:59")]
    #[case(420, "00:07:00")]
    #[case(3_661, "01:01:01")]
    #[case(360_000, "100:00:00")]
    fn clock_format(#[case] secs: u64, #[case] expected: &str) {
        assert_eq!(format_clock(secs), expected);
    }

    #[rstest]
    #[case(0, "0h 0m")]
    #[case(5_400, "1h 30m")]
    #[case(7_259, "2h 0m")]
    fn hours_minutes_format(#[case] secs: u64, #[case] expected: &str) {
        assert_eq!(format_hours_minutes(secs), expected);
    }
}
