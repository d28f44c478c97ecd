use crate::domain::models::timestamp::LocalTimestamp;
use crate::error::AppError;
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize};

/// One entry in the fixed menu of bookable start times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub label: String,
    pub hour: u32,
    pub minute: u32,
}

impl Slot {
    /// Validated construction: slot times are static configuration, so an
    /// out-of-range time is a configuration error caught here, not deep in
    /// the calendar math.
    pub fn new(hour: u32, minute: u32) -> Result<Self, AppError> {
        if hour > 23 || minute > 59 {
            return Err(AppError::SlotConfig(format!(
                "{:02}:{:02} is not a valid time of day",
                hour, minute
            )));
        }
        Ok(Self {
            label: format_label(hour, minute),
            hour,
            minute,
        })
    }

    /// The slot's start instant on a given date.
    pub fn start_on(&self, date: NaiveDate, tz: Tz) -> Result<LocalTimestamp, AppError> {
        LocalTimestamp::resolve(date, self.hour, self.minute, tz)
    }
}

// Deserialized slots may omit the label; it is derived from the time so the
// display form stays consistent with everything else keyed on it.
impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct SlotSpec {
            #[serde(default)]
            label: Option<String>,
            hour: u32,
            minute: u32,
        }

        let spec = SlotSpec::deserialize(deserializer)?;
        if spec.hour > 23 || spec.minute > 59 {
            return Err(serde::de::Error::custom(format!(
                "{:02}:{:02} is not a valid time of day",
                spec.hour, spec.minute
            )));
        }
        Ok(Slot {
            label: spec
                .label
                .unwrap_or_else(|| format_label(spec.hour, spec.minute)),
            hour: spec.hour,
            minute: spec.minute,
        })
    }
}

/// 12-hour display form (`"6:00 AM"`, `"12:30 PM"`) used everywhere a slot
/// is shown or keyed. The only place this format is produced.
pub fn format_label(hour: u32, minute: u32) -> String {
    let (display_hour, period) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{}:{:02} {}", display_hour, minute, period)
}

/// The fixed, ordered menu of bookable start times. Static configuration,
/// identical for every date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotMenu(Vec<Slot>);

impl SlotMenu {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self(slots)
    }

    /// Reference deployment menu: every hour from 6:00 AM through 8:00 PM.
    pub fn hourly_default() -> Self {
        Self(
            (6..=20)
                .map(|hour| Slot {
                    label: format_label(hour, 0),
                    hour,
                    minute: 0,
                })
                .collect(),
        )
    }

    pub fn find(&self, label: &str) -> Option<&Slot> {
        self.0.iter().find(|slot| slot.label == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
