use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer's desired booking, validated only at the point the event
/// interval is built. Produced by the intake layer; consumed after the
/// payment collaborator signals confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub date: NaiveDate,
    pub slot_label: String,
    /// Fractional hours allowed; minimum 0.5.
    pub duration_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub date: NaiveDate,
    pub slot_label: String,
    pub duration_hours: f64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_note: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub request: BookingRequest,
    pub name: String,
    pub email: String,
    pub note: Option<String>,
}

impl BookingRecord {
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: params.request.date,
            slot_label: params.request.slot_label,
            duration_hours: params.request.duration_hours,
            customer_name: params.name,
            customer_email: params.email,
            customer_note: params.note,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
