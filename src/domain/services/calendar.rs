use crate::domain::models::interval::BusyInterval;
use icalendar::{Calendar, Component, Event as IcalEvent, EventLike};

/// Generates an iCalendar (.ics) string for a booked interval, for
/// calendar-write collaborators that ingest .ics rather than a JSON API.
pub fn generate_ics(
    interval: &BusyInterval,
    summary: &str,
    description: Option<&str>,
    uid: &str,
) -> String {
    let mut calendar = Calendar::new();

    let mut event = IcalEvent::new();
    event
        .summary(summary)
        .starts(interval.start.to_utc())
        .ends(interval.end.to_utc())
        .uid(uid);
    if let Some(desc) = description {
        event.description(desc);
    }

    calendar.push(event.done());
    calendar.to_string()
}
