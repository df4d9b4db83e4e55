use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use super::RuleOutcome;

// Fixed-width shapes. Seconds stop at 59; chrono alone would take a leap second.
static RFC3339_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-5][0-9](?:\.[0-9]+)?(?:Z|[+-][0-9]{2}:[0-9]{2})$",
    )
    .expect("Invalid regex")
});

static DATETIME_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-5][0-9]$").expect("Invalid regex")
});

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid regex"));

static TIME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-5][0-9]$").expect("Invalid regex"));

/// Recognized timestamp layouts, selected by a case-insensitive key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampLayout {
    /// `2024-08-09T12:34:56Z`, `2024-08-09T12:34:56+07:00`
    Rfc3339,
    /// `2024-08-09 12:34:56`
    DateTime,
    /// `2024-08-09`
    Date,
    /// `12:34:56`
    Time,
}

impl TimestampLayout {
    pub const ALL: [Self; 4] = [Self::Rfc3339, Self::DateTime, Self::Date, Self::Time];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Rfc3339 => "rfc3339",
            Self::DateTime => "datetime",
            Self::Date => "date",
            Self::Time => "time",
        }
    }

    fn shape(self) -> &'static Regex {
        match self {
            Self::Rfc3339 => &*RFC3339_SHAPE,
            Self::DateTime => &*DATETIME_SHAPE,
            Self::Date => &*DATE_SHAPE,
            Self::Time => &*TIME_SHAPE,
        }
    }

    /// The value must have the layout's exact shape and be a real calendar moment.
    #[must_use]
    pub fn matches(self, value: &str) -> bool {
        if !self.shape().is_match(value) {
            return false;
        }
        match self {
            Self::Rfc3339 => DateTime::parse_from_rfc3339(value).is_ok(),
            Self::DateTime => NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").is_ok(),
            Self::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
            Self::Time => NaiveTime::parse_from_str(value, "%H:%M:%S").is_ok(),
        }
    }

    fn keys() -> String {
        Self::ALL.map(Self::key).join(", ")
    }
}

impl fmt::Display for TimestampLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TimestampLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("--timestamp must be one of [{}]: {s}", Self::keys()))
    }
}

pub fn check(layout: &str, value: &str) -> RuleOutcome {
    let layout = match layout.parse::<TimestampLayout>() {
        Ok(layout) => layout,
        Err(issue) => return RuleOutcome::ArgumentFail(issue),
    };

    if value.is_empty() {
        return RuleOutcome::Passed;
    }
    RuleOutcome::require(layout.matches(value), &format!("must be a valid {layout}"))
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
