use crate::domain::models::booking::{BookingRecord, BookingStatus};
use crate::domain::models::interval::BusyInterval;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

/// One commitment as reported by the external calendar. Providers report in
/// UTC (or any zone normalized to UTC at the transport edge); conversion to
/// the business timezone happens inside this crate.
#[derive(Debug, Clone)]
pub struct CalendarEvent {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub summary: Option<String>,
}

#[async_trait]
pub trait CalendarReader: Send + Sync {
    /// All events overlapping the given business-timezone date.
    async fn busy_events(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>, AppError>;
}

#[async_trait]
pub trait CalendarWriter: Send + Sync {
    /// Registers a busy interval with the external calendar. Implementations
    /// must preserve the exact start and end instants; no rounding.
    async fn register(
        &self,
        interval: &BusyInterval,
        summary: &str,
        description: Option<&str>,
    ) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn create(&self, record: &BookingRecord) -> Result<(), AppError>;
    async fn update_status(&self, id: &str, status: BookingStatus) -> Result<(), AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<BookingRecord>, AppError>;
}
