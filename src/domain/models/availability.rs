use chrono::NaiveDate;
use serde::Serialize;

/// Per-slot availability for a single date. Entries keep menu order and
/// cover every slot in the menu exactly once; a date with no calendar data
/// is fully available, never missing keys. Computed fresh per request,
/// never cached.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityMap {
    pub date: NaiveDate,
    pub slots: Vec<SlotAvailability>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotAvailability {
    pub label: String,
    pub available: bool,
}

impl AvailabilityMap {
    /// None when the label is not part of the menu this map was built from.
    pub fn is_available(&self, label: &str) -> Option<bool> {
        self.slots
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.available)
    }

    pub fn open_slots(&self) -> impl Iterator<Item = &SlotAvailability> {
        self.slots.iter().filter(|entry| entry.available)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
