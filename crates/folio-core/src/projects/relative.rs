//! Relative-time labels ("today", "3 days ago", ...).
//!
//! Pure functions of two instants so they can be tested without a clock.

use std::fmt;

use chrono::{DateTime, Utc};

const DAY_SECONDS: i64 = 24 * 60 * 60;

/// Coarse age bucket of a timestamp relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    Today,
    Yesterday,
    DaysAgo(i64),
    WeeksAgo(i64),
    MonthsAgo(i64),
    YearsAgo(i64),
}

/// Whole days elapsed between `then` and `now`, rounded down.
///
/// Negative when `then` lies in the future.
pub fn elapsed_days(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_seconds().div_euclid(DAY_SECONDS)
}

/// Bucket `then` relative to `now`.
///
/// Months are 30 days and years 365 days. Timestamps in the future count
/// as today.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> RelativeTime {
    match elapsed_days(then, now) {
        days if days <= 0 => RelativeTime::Today,
        1 => RelativeTime::Yesterday,
        days if days < 7 => RelativeTime::DaysAgo(days),
        days if days < 30 => RelativeTime::WeeksAgo(days / 7),
        days if days < 365 => RelativeTime::MonthsAgo(days / 30),
        days => RelativeTime::YearsAgo(days / 365),
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeTime::Today => f.write_str("today"),
            RelativeTime::Yesterday => f.write_str("yesterday"),
            RelativeTime::DaysAgo(n) => write!(f, "{} days ago", n),
            RelativeTime::WeeksAgo(n) => write!(f, "{} weeks ago", n),
            RelativeTime::MonthsAgo(n) => write!(f, "{} months ago", n),
            RelativeTime::YearsAgo(n) => write!(f, "{} years ago", n),
        }
    }
}
