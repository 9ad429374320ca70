use chrono::NaiveTime;
use liftlog_domain::WeightUnit;

#[allow(clippy::missing_errors_doc)]
pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, Error>;
    fn write_settings(&self, settings: &Settings) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

/// User preferences that outlive a single run of the app.
///
/// Fields missing from a stored document take their default value.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub onboarding_completed: bool,
    pub notifications: bool,
    pub reminder_time: Option<NaiveTime>,
    pub weight_unit: String,
    pub theme: Theme,
}

impl Settings {
    #[must_use]
    pub fn weight_unit(&self) -> WeightUnit {
        self.weight_unit.parse().unwrap_or_default()
    }

    pub fn set_weight_unit(&mut self, unit: WeightUnit) {
        self.weight_unit = unit.as_ref().to_string();
    }

    /// Time of the daily reminder, if notifications are enabled.
    #[must_use]
    pub fn reminder(&self) -> Option<NaiveTime> {
        if self.notifications {
            self.reminder_time
        } else {
            None
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            onboarding_completed: false,
            notifications: false,
            reminder_time: None,
            weight_unit: WeightUnit::Lbs.as_ref().to_string(),
            theme: Theme::System,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    System,
    Light,
    Dark,
}
