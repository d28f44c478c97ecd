use crate::error::AppError;
use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A wall-clock instant in the single configured business timezone.
///
/// The UTC offset is always derived from the tz database for this specific
/// wall-clock value, so timestamps on either side of a DST transition each
/// carry their own offset. Ordering and equality compare the wall-clock
/// value. Only the RFC 3339 form (with explicit offset) is ever persisted
/// or transmitted.
#[derive(Debug, Clone, Copy)]
pub struct LocalTimestamp(DateTime<Tz>);

impl LocalTimestamp {
    /// Resolves a wall-clock date and time-of-day in `tz`.
    ///
    /// Ambiguous wall times (the repeated fall-back hour) take the earlier
    /// offset. Nonexistent wall times (the spring-forward gap) are shifted
    /// forward by an hour, past the gap.
    pub fn resolve(date: NaiveDate, hour: u32, minute: u32, tz: Tz) -> Result<Self, AppError> {
        let naive = date.and_hms_opt(hour, minute, 0).ok_or_else(|| {
            AppError::InvalidInterval(format!(
                "{:02}:{:02} is not a valid time of day",
                hour, minute
            ))
        })?;
        Self::resolve_naive(naive, tz)
    }

    pub(crate) fn resolve_naive(naive: NaiveDateTime, tz: Tz) -> Result<Self, AppError> {
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(Self(dt)),
            LocalResult::Ambiguous(earliest, _) => Ok(Self(earliest)),
            // Spring-forward gap; the skipped window is one hour in every
            // zone chrono-tz ships.
            LocalResult::None => match tz.from_local_datetime(&(naive + Duration::hours(1))) {
                LocalResult::Single(dt) => Ok(Self(dt)),
                LocalResult::Ambiguous(earliest, _) => Ok(Self(earliest)),
                LocalResult::None => Err(AppError::Timezone(format!(
                    "{} cannot be resolved in {}",
                    naive, tz
                ))),
            },
        }
    }

    /// Converts an instant reported in UTC into the business zone.
    pub fn from_utc(instant: DateTime<Utc>, tz: Tz) -> Self {
        Self(instant.with_timezone(&tz))
    }

    /// Wall-clock minute arithmetic with hour/day rollover. The result
    /// re-derives its own UTC offset, so an addition that crosses a DST
    /// transition keeps wall-clock semantics rather than elapsed-UTC ones.
    pub fn add_minutes(&self, minutes: i64) -> Result<Self, AppError> {
        Self::resolve_naive(
            self.0.naive_local() + Duration::minutes(minutes),
            self.0.timezone(),
        )
    }

    pub fn naive_local(&self) -> NaiveDateTime {
        self.0.naive_local()
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl PartialEq for LocalTimestamp {
    fn eq(&self, other: &Self) -> bool {
        self.naive_local() == other.naive_local()
    }
}

impl Eq for LocalTimestamp {}

impl PartialOrd for LocalTimestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalTimestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.naive_local().cmp(&other.naive_local())
    }
}

impl fmt::Display for LocalTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for LocalTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}
