use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown slot: {0}")]
    InvalidSlot(String),
    #[error("Booking duration must be at least 0.5 hours (got {0})")]
    InvalidDuration(f64),
    #[error("Timezone could not be resolved: {0}")]
    Timezone(String),
    #[error("Invalid slot configuration: {0}")]
    SlotConfig(String),
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),
    #[error("Calendar service error: {0}")]
    Calendar(String),
    #[error("Booking store error: {0}")]
    Store(String),
}

impl AppError {
    /// True for errors caused by malformed booking input rather than
    /// collaborator or configuration failures. The API layer maps these
    /// to a 400-class validation message.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::InvalidSlot(_) | AppError::InvalidDuration(_))
    }
}
