use crate::config::Config;
use crate::domain::models::availability::AvailabilityMap;
use crate::domain::models::booking::{BookingRecord, BookingStatus, NewBookingParams};
use crate::domain::models::interval::BusyInterval;
use crate::domain::models::slot::SlotMenu;
use crate::domain::ports::{BookingStore, CalendarReader, CalendarWriter};
use crate::domain::services::availability::resolve_availability;
use crate::domain::services::event_interval::build_event_interval;
use crate::error::AppError;
use chrono::NaiveDate;
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::{info, warn};

/// Ties the pure availability/interval math to the external calendar and
/// booking-store collaborators.
///
/// Known race, owned by the orchestration layer: two customers can both see
/// a slot as open and both reach `confirm_booking` before either interval
/// lands on the calendar. Callers must serialize writes per (date, slot) or
/// re-validate availability inside the store transaction before confirming.
pub struct Scheduler {
    calendar_reader: Arc<dyn CalendarReader>,
    calendar_writer: Arc<dyn CalendarWriter>,
    booking_store: Arc<dyn BookingStore>,
    menu: SlotMenu,
    tz: Tz,
}

impl Scheduler {
    pub fn new(
        calendar_reader: Arc<dyn CalendarReader>,
        calendar_writer: Arc<dyn CalendarWriter>,
        booking_store: Arc<dyn BookingStore>,
        config: &Config,
    ) -> Result<Self, AppError> {
        Ok(Self {
            calendar_reader,
            calendar_writer,
            booking_store,
            menu: config.slot_menu.clone(),
            tz: config.tz()?,
        })
    }

    /// Availability for one date from live calendar data.
    ///
    /// A calendar read failure propagates as an error so the caller can
    /// surface a degraded-service message. It is never reported as a fully
    /// open day.
    pub async fn availability(&self, date: NaiveDate) -> Result<AvailabilityMap, AppError> {
        let events = self
            .calendar_reader
            .busy_events(date)
            .await
            .inspect_err(|e| warn!("Calendar read failed for {}: {}", date, e))?;

        let mut busy = Vec::with_capacity(events.len());
        for event in events {
            busy.push(BusyInterval::from_utc(
                event.start,
                event.end,
                self.tz,
                event.summary,
            )?);
        }

        resolve_availability(date, &busy, &self.menu, self.tz)
    }

    /// Persists a paid booking and registers its interval with the external
    /// calendar, so subsequent availability reads see the slot as blocked.
    /// Returns the record and interval for the confirmation response.
    pub async fn confirm_booking(
        &self,
        params: NewBookingParams,
        summary: &str,
    ) -> Result<(BookingRecord, BusyInterval), AppError> {
        let interval = build_event_interval(&params.request, &self.menu, self.tz)?;

        let mut record = BookingRecord::new(params);
        self.booking_store.create(&record).await?;

        self.calendar_writer
            .register(&interval, summary, record.customer_note.as_deref())
            .await?;

        self.booking_store
            .update_status(&record.id, BookingStatus::Confirmed)
            .await?;
        record.status = BookingStatus::Confirmed;

        info!(
            "Booking {} confirmed: {} on {} for {}h",
            record.id, record.slot_label, record.date, record.duration_hours
        );

        Ok((record, interval))
    }
}
