use crate::domain::models::slot::SlotMenu;
use crate::error::AppError;
use chrono_tz::Tz;
use std::env;

#[derive(Clone)]
pub struct Config {
    /// IANA zone every wall-clock computation uses.
    pub timezone: String,
    /// Fixed ordered menu of bookable start times, identical for every date.
    pub slot_menu: SlotMenu,
}

impl Config {
    pub fn from_env() -> Self {
        let slot_menu = match env::var("SLOT_MENU_JSON") {
            Ok(json) => serde_json::from_str(&json)
                .expect("SLOT_MENU_JSON must be a JSON array of {hour, minute[, label]}"),
            Err(_) => SlotMenu::hourly_default(),
        };

        Self {
            timezone: env::var("BOOKING_TIMEZONE").unwrap_or_else(|_| "America/Denver".to_string()),
            slot_menu,
        }
    }

    /// Resolves the configured IANA id against the tz database. Failure is
    /// a fatal configuration error, not a per-request condition.
    pub fn tz(&self) -> Result<Tz, AppError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::Timezone(self.timezone.clone()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: "America/Denver".to_string(),
            slot_menu: SlotMenu::hourly_default(),
        }
    }
}
