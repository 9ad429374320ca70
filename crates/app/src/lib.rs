#![warn(clippy::pedantic)]

pub mod log;
pub mod settings;

use ::log::{debug, info};
use liftlog_domain::{Service, WeightUnit, WorkoutRepository};

pub use settings::{Settings, SettingsRepository, Theme};

/// Everything a presentation layer needs, assembled once at start-up.
pub struct App<R, S> {
    settings: Settings,
    settings_repository: S,
    service: Service<R>,
}

impl<R: WorkoutRepository, S: SettingsRepository> App<R, S> {
    /// Reads the persisted settings once. A failing read falls back to the
    /// defaults so that a damaged settings document never blocks start-up.
    pub fn start(workouts: R, settings_repository: S) -> Self {
        let settings = match settings_repository.read_settings() {
            Ok(settings) => settings,
            Err(err) => {
                ::log::warn!("failed to read settings, using defaults: {err}");
                Settings::default()
            }
        };
        info!(
            "starting with onboarding {}",
            if settings.onboarding_completed {
                "completed"
            } else {
                "pending"
            }
        );
        Self {
            settings,
            settings_repository,
            service: Service::new(workouts),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn service(&self) -> &Service<R> {
        &self.service
    }

    #[must_use]
    pub fn needs_onboarding(&self) -> bool {
        !self.settings.onboarding_completed
    }

    #[must_use]
    pub fn weight_unit(&self) -> WeightUnit {
        self.settings.weight_unit()
    }

    /// Persists new settings and makes them the current ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings could not be written. The current
    /// settings stay unchanged in that case.
    pub fn update_settings(&mut self, settings: Settings) -> anyhow::Result<()> {
        self.settings_repository.write_settings(&settings)?;
        debug!("settings updated");
        self.settings = settings;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the settings could not be written.
    pub fn complete_onboarding(&mut self) -> anyhow::Result<()> {
        let settings = Settings {
            onboarding_completed: true,
            ..self.settings.clone()
        };
        self.update_settings(settings)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use liftlog_domain::{
        CreateError, DeleteError, ReadError, UpdateError, Workout, WorkoutID, WorkoutService,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    struct NoWorkouts;

    impl WorkoutRepository for NoWorkouts {
        fn read_workouts(&self) -> Result<Vec<Workout>, ReadError> {
            Ok(vec![])
        }

        fn read_workout(&self, _: WorkoutID) -> Result<Workout, ReadError> {
            Err(ReadError::NotFound)
        }

        fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
            Ok(workout)
        }

        fn replace_workout(&self, _: Workout) -> Result<Workout, UpdateError> {
            Err(UpdateError::NotFound)
        }

        fn delete_workout(&self, _: WorkoutID) -> Result<WorkoutID, DeleteError> {
            Err(DeleteError::NotFound)
        }
    }

    #[derive(Default)]
    struct InMemorySettings {
        settings: RefCell<Option<Settings>>,
        read_only: bool,
    }

    impl SettingsRepository for InMemorySettings {
        fn read_settings(&self) -> Result<Settings, settings::Error> {
            self.settings
                .borrow()
                .clone()
                .ok_or(settings::Error::Unknown("no settings".to_string()))
        }

        fn write_settings(&self, settings: &Settings) -> Result<(), settings::Error> {
            if self.read_only {
                return Err(settings::Error::Unknown("read only".to_string()));
            }
            *self.settings.borrow_mut() = Some(settings.clone());
            Ok(())
        }
    }

    #[test]
    fn test_app_start_with_defaults() {
        let app = App::start(NoWorkouts, InMemorySettings::default());

        assert_eq!(app.settings(), &Settings::default());
        assert!(app.needs_onboarding());
        assert_eq!(app.weight_unit(), WeightUnit::Lbs);
        assert_eq!(app.service().get_workouts().unwrap(), Vec::<Workout>::new());
    }

    #[test]
    fn test_app_start_with_stored_settings() {
        let stored = Settings {
            onboarding_completed: true,
            weight_unit: "kg".to_string(),
            ..Settings::default()
        };
        let app = App::start(
            NoWorkouts,
            InMemorySettings {
                settings: RefCell::new(Some(stored.clone())),
                read_only: false,
            },
        );

        assert_eq!(app.settings(), &stored);
        assert!(!app.needs_onboarding());
        assert_eq!(app.weight_unit(), WeightUnit::Kg);
    }

    #[test]
    fn test_app_complete_onboarding() {
        let mut app = App::start(NoWorkouts, InMemorySettings::default());

        app.complete_onboarding().unwrap();

        assert!(!app.needs_onboarding());
        assert_eq!(
            app.settings_repository.read_settings().unwrap(),
            app.settings().clone()
        );
    }

    #[test]
    fn test_app_update_settings_failure_keeps_current_settings() {
        let mut app = App::start(
            NoWorkouts,
            InMemorySettings {
                settings: RefCell::new(None),
                read_only: true,
            },
        );

        assert!(app.complete_onboarding().is_err());
        assert!(app.needs_onboarding());
    }
}
