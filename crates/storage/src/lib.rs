#![warn(clippy::pedantic)]

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use liftlog_app::App;
use log::{LevelFilter, debug};

pub mod catalog;
pub mod json_store;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod media;
pub mod record;

pub use catalog::{load_catalog, parse_catalog};
pub use json_store::{JsonStore, JsonStoreError, Store};
pub use local_storage::LocalStorage;
pub use media::{MediaError, MediaStore, new_filename};

/// Opens the stores below `data_dir`, installs the logger and starts the app.
///
/// # Errors
///
/// Returns an error if `data_dir` cannot be created.
pub fn start(data_dir: &Path) -> anyhow::Result<App<JsonStore, LocalStorage>> {
    std::fs::create_dir_all(data_dir)?;
    let local_storage = LocalStorage::new(data_dir);
    if liftlog_app::log::init(
        Arc::new(Mutex::new(local_storage.clone())),
        LevelFilter::Debug,
    )
    .is_err()
    {
        debug!("logger already initialized");
    }
    Ok(App::start(JsonStore::new(data_dir), local_storage))
}

#[cfg(test)]
mod tests {
    pub mod data;

    use liftlog_domain::{WorkoutService, sample};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_start() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("liftlog");

        let mut app = start(&data_dir).unwrap();
        assert!(app.needs_onboarding());
        app.complete_onboarding().unwrap();

        let workout = sample::push_day(*data::DATE);
        app.service().create_workout(workout.clone()).unwrap();

        let app = start(&data_dir).unwrap();
        assert!(!app.needs_onboarding());
        assert_eq!(app.service().get_workouts().unwrap(), vec![workout]);
    }
}
