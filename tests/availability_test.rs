use booking_core::domain::models::interval::BusyInterval;
use booking_core::domain::models::slot::SlotMenu;
use booking_core::domain::models::timestamp::LocalTimestamp;
use booking_core::domain::services::availability::resolve_availability;
use chrono::NaiveDate;
use chrono_tz::America::Denver;
use chrono_tz::Tz;

const TZ: Tz = Denver;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ts(date: NaiveDate, hour: u32, minute: u32) -> LocalTimestamp {
    LocalTimestamp::resolve(date, hour, minute, TZ).unwrap()
}

fn busy(date: NaiveDate, from: (u32, u32), to: (u32, u32)) -> BusyInterval {
    BusyInterval::new(ts(date, from.0, from.1), ts(date, to.0, to.1), None).unwrap()
}

#[test]
fn test_empty_calendar_is_fully_available() {
    let menu = SlotMenu::hourly_default();
    let day = date(2026, 6, 10);

    let map = resolve_availability(day, &[], &menu, TZ).unwrap();

    assert_eq!(map.len(), menu.len());
    assert!(map.slots.iter().all(|entry| entry.available));
}

#[test]
fn test_every_menu_slot_present_in_order() {
    let menu = SlotMenu::hourly_default();
    let day = date(2026, 6, 10);
    let intervals = vec![
        busy(day, (10, 0), (11, 0)),
        busy(day, (14, 0), (16, 30)),
    ];

    let map = resolve_availability(day, &intervals, &menu, TZ).unwrap();

    let expected: Vec<&str> = menu.iter().map(|s| s.label.as_str()).collect();
    let actual: Vec<&str> = map.slots.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_exact_start_blocks_slot() {
    let menu = SlotMenu::hourly_default();
    let day = date(2026, 6, 10);
    let intervals = vec![busy(day, (10, 0), (11, 0))];

    let map = resolve_availability(day, &intervals, &menu, TZ).unwrap();

    assert_eq!(map.is_available("10:00 AM"), Some(false));
    assert_eq!(map.is_available("9:00 AM"), Some(true));
}

#[test]
fn test_back_to_back_slot_stays_open() {
    let menu = SlotMenu::hourly_default();
    let day = date(2026, 6, 10);
    let intervals = vec![busy(day, (10, 0), (11, 0))];

    let map = resolve_availability(day, &intervals, &menu, TZ).unwrap();

    // Half-open: the interval ends exactly when the 11 AM slot starts.
    assert_eq!(map.is_available("11:00 AM"), Some(true));
}

#[test]
fn test_multi_hour_interval_blocks_every_covered_start() {
    let menu = SlotMenu::hourly_default();
    let day = date(2026, 6, 10);
    let intervals = vec![busy(day, (14, 0), (16, 30))];

    let map = resolve_availability(day, &intervals, &menu, TZ).unwrap();

    assert_eq!(map.is_available("2:00 PM"), Some(false));
    assert_eq!(map.is_available("3:00 PM"), Some(false));
    assert_eq!(map.is_available("4:00 PM"), Some(false));
    assert_eq!(map.is_available("5:00 PM"), Some(true));
    assert_eq!(map.open_slots().count(), menu.len() - 3);
}

#[test]
fn test_interval_from_previous_day_blocks_morning() {
    let menu = SlotMenu::hourly_default();
    let day = date(2026, 6, 10);

    // [11:00 PM June 9, 6:30 AM June 10): spans midnight into the queried
    // date, so comparisons must use full timestamps, not minute-of-day.
    let overnight = BusyInterval::new(
        ts(date(2026, 6, 9), 23, 0),
        ts(day, 6, 30),
        Some("overnight retreat".to_string()),
    )
    .unwrap();

    let map = resolve_availability(day, &[overnight], &menu, TZ).unwrap();

    assert_eq!(map.is_available("6:00 AM"), Some(false));
    assert_eq!(map.is_available("7:00 AM"), Some(true));
}

#[test]
fn test_unknown_label_lookup_is_none() {
    let menu = SlotMenu::hourly_default();
    let map = resolve_availability(date(2026, 6, 10), &[], &menu, TZ).unwrap();

    assert_eq!(map.is_available("9:00 PM"), None);
}
