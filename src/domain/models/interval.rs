use crate::domain::models::timestamp::LocalTimestamp;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// A half-open `[start, end)` commitment on the calendar, in the business
/// timezone.
#[derive(Debug, Clone, Serialize)]
pub struct BusyInterval {
    pub start: LocalTimestamp,
    pub end: LocalTimestamp,
    pub label: Option<String>,
}

impl BusyInterval {
    pub fn new(
        start: LocalTimestamp,
        end: LocalTimestamp,
        label: Option<String>,
    ) -> Result<Self, AppError> {
        if start >= end {
            return Err(AppError::InvalidInterval(format!(
                "start {} is not before end {}",
                start, end
            )));
        }
        Ok(Self { start, end, label })
    }

    /// Normalizes an event reported in UTC by the calendar collaborator into
    /// the business zone.
    pub fn from_utc(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        tz: Tz,
        label: Option<String>,
    ) -> Result<Self, AppError> {
        Self::new(
            LocalTimestamp::from_utc(start, tz),
            LocalTimestamp::from_utc(end, tz),
            label,
        )
    }

    /// Half-open containment. A point equal to `end` is outside the
    /// interval, which is what allows back-to-back bookings.
    pub fn contains(&self, point: &LocalTimestamp) -> bool {
        self.start <= *point && *point < self.end
    }
}
