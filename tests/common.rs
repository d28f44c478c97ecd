#![allow(dead_code)]

use async_trait::async_trait;
use booking_core::domain::models::booking::{BookingRecord, BookingStatus};
use booking_core::domain::models::interval::BusyInterval;
use booking_core::domain::ports::{BookingStore, CalendarEvent, CalendarReader, CalendarWriter};
use booking_core::error::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// Calendar reader returning a canned event list for every date.
pub struct StaticCalendarReader {
    pub events: Vec<CalendarEvent>,
}

impl StaticCalendarReader {
    pub fn empty() -> Self {
        Self { events: Vec::new() }
    }
}

#[async_trait]
impl CalendarReader for StaticCalendarReader {
    async fn busy_events(&self, _date: NaiveDate) -> Result<Vec<CalendarEvent>, AppError> {
        Ok(self.events.clone())
    }
}

/// Calendar reader simulating an unreachable upstream.
pub struct FailingCalendarReader;

#[async_trait]
impl CalendarReader for FailingCalendarReader {
    async fn busy_events(&self, _date: NaiveDate) -> Result<Vec<CalendarEvent>, AppError> {
        Err(AppError::Calendar("upstream timeout".to_string()))
    }
}

/// Records every registered interval as exact UTC instants.
#[derive(Default)]
pub struct RecordingCalendarWriter {
    pub registered: Mutex<Vec<(DateTime<Utc>, DateTime<Utc>, String)>>,
}

impl RecordingCalendarWriter {
    /// Registered intervals replayed as reader events, for feeding a second
    /// availability pass.
    pub fn as_events(&self) -> Vec<CalendarEvent> {
        self.registered
            .lock()
            .unwrap()
            .iter()
            .map(|(start, end, summary)| CalendarEvent {
                start: *start,
                end: *end,
                summary: Some(summary.clone()),
            })
            .collect()
    }
}

#[async_trait]
impl CalendarWriter for RecordingCalendarWriter {
    async fn register(
        &self,
        interval: &BusyInterval,
        summary: &str,
        _description: Option<&str>,
    ) -> Result<(), AppError> {
        self.registered.lock().unwrap().push((
            interval.start.to_utc(),
            interval.end.to_utc(),
            summary.to_string(),
        ));
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryBookingStore {
    records: Mutex<HashMap<String, BookingRecord>>,
}

impl InMemoryBookingStore {
    pub fn get(&self, id: &str) -> Option<BookingRecord> {
        self.records.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn create(&self, record: &BookingRecord) -> Result<(), AppError> {
        self.records
            .lock()
            .unwrap()
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn update_status(&self, id: &str, status: BookingStatus) -> Result<(), AppError> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .get_mut(id)
            .ok_or_else(|| AppError::Store(format!("no booking with id {}", id)))?;
        record.status = status;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<BookingRecord>, AppError> {
        Ok(self.records.lock().unwrap().get(id).cloned())
    }
}
