use crate::domain::models::booking::BookingRequest;
use crate::domain::models::interval::BusyInterval;
use crate::domain::models::slot::SlotMenu;
use crate::error::AppError;
use chrono_tz::Tz;

pub const MIN_DURATION_HOURS: f64 = 0.5;
/// Longest bookable appointment: one full day.
pub const MAX_DURATION_HOURS: f64 = 24.0;

/// Builds the busy interval a confirmed booking occupies on the calendar.
///
/// `end = start + duration` as wall-clock minute arithmetic, rolling over
/// hour and day boundaries, and start and end each derive the UTC offset
/// for their own instant. A duration crossing a DST transition therefore
/// keeps its wall-clock length, not its elapsed-UTC length.
///
/// Fed back into [`resolve_availability`], the returned interval blocks the
/// booked slot and leaves the slot starting exactly at `end` available.
///
/// Pure; registering the interval with the calendar collaborator is the
/// caller's responsibility.
///
/// [`resolve_availability`]: crate::domain::services::availability::resolve_availability
pub fn build_event_interval(
    request: &BookingRequest,
    menu: &SlotMenu,
    tz: Tz,
) -> Result<BusyInterval, AppError> {
    let slot = menu
        .find(&request.slot_label)
        .ok_or_else(|| AppError::InvalidSlot(request.slot_label.clone()))?;

    // NaN and infinities fail is_finite; the cap keeps the minute
    // arithmetic well inside chrono's Duration range.
    if !request.duration_hours.is_finite()
        || request.duration_hours < MIN_DURATION_HOURS
        || request.duration_hours > MAX_DURATION_HOURS
    {
        return Err(AppError::InvalidDuration(request.duration_hours));
    }

    let duration_min = (request.duration_hours * 60.0).round() as i64;
    let start = slot.start_on(request.date, tz)?;
    let end = start.add_minutes(duration_min)?;

    BusyInterval::new(start, end, Some(slot.label.clone()))
}
