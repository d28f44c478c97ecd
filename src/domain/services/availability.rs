use crate::domain::models::availability::{AvailabilityMap, SlotAvailability};
use crate::domain::models::interval::BusyInterval;
use crate::domain::models::slot::SlotMenu;
use crate::error::AppError;
use chrono::NaiveDate;
use chrono_tz::Tz;

/// Computes per-slot availability for one date.
///
/// A slot is blocked when its start instant falls inside any busy interval
/// under the half-open rule `interval.start <= slot_start < interval.end`.
/// A slot starting exactly at an interval's end stays available, so
/// back-to-back bookings work.
///
/// Only the slot's start point is tested; the slot's own implied duration
/// is not checked against the interval. This matches the behavior the
/// booking flow has always had and can under-block when slot granularity is
/// coarser than booking granularity.
///
/// Pure over its inputs: fetching and normalizing the intervals is the
/// caller's job, and a fetch failure must be surfaced upstream rather than
/// passed in as an empty list, since an empty list legitimately means a
/// fully open day.
pub fn resolve_availability(
    date: NaiveDate,
    busy_intervals: &[BusyInterval],
    menu: &SlotMenu,
    tz: Tz,
) -> Result<AvailabilityMap, AppError> {
    let mut slots = Vec::with_capacity(menu.len());

    for slot in menu.iter() {
        let slot_start = slot.start_on(date, tz)?;
        let blocked = busy_intervals
            .iter()
            .any(|interval| interval.contains(&slot_start));

        slots.push(SlotAvailability {
            label: slot.label.clone(),
            available: !blocked,
        });
    }

    Ok(AvailabilityMap { date, slots })
}
