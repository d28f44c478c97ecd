pub mod availability;
pub mod calendar;
pub mod event_interval;
pub mod scheduling;
