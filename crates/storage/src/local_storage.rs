use std::{
    collections::VecDeque,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use liftlog_app::{Settings, SettingsRepository, log, settings};
use serde::{Serialize, de::DeserializeOwned};

const FILE_SETTINGS: &str = "settings.json";
const FILE_LOG: &str = "log.json";

/// Small documents of the app itself, kept next to the workout stores.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn get<V: DeserializeOwned + Default>(&self, file: &str) -> Result<V, String> {
        match fs::read(self.root.join(file)) {
            Ok(content) => serde_json::from_slice(&content).map_err(|err| err.to_string()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(V::default()),
            Err(err) => Err(err.to_string()),
        }
    }

    fn set<V: Serialize>(&self, file: &str, value: &V) -> Result<(), String> {
        let content = serde_json::to_vec_pretty(value).map_err(|err| err.to_string())?;
        fs::create_dir_all(&self.root).map_err(|err| err.to_string())?;
        fs::write(self.root.join(file), content).map_err(|err| err.to_string())
    }
}

impl SettingsRepository for LocalStorage {
    fn read_settings(&self) -> Result<Settings, settings::Error> {
        self.get(FILE_SETTINGS).map_err(settings::Error::Unknown)
    }

    fn write_settings(&self, settings: &Settings) -> Result<(), settings::Error> {
        self.set(FILE_SETTINGS, settings)
            .map_err(settings::Error::Unknown)
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.get(FILE_LOG).map_err(log::Error::Unknown)
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::push_entry(&mut entries, entry);
        self.set(FILE_LOG, &entries).map_err(log::Error::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use ::log::Level;
    use chrono::NaiveTime;
    use liftlog_app::{Theme, log::Repository};
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(message: &str) -> log::Entry {
        log::Entry {
            time: "Mar 01 18:30:00".to_string(),
            level: Level::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_read_settings_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        assert_eq!(storage.read_settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_write_settings() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().join("data"));
        let settings = Settings {
            onboarding_completed: true,
            notifications: true,
            reminder_time: NaiveTime::from_hms_opt(7, 0, 0),
            weight_unit: "kg".to_string(),
            theme: Theme::Dark,
        };

        storage.write_settings(&settings).unwrap();

        assert_eq!(storage.read_settings().unwrap(), settings);
    }

    #[test]
    fn test_read_settings_invalid_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_SETTINGS), "[").unwrap();
        let storage = LocalStorage::new(dir.path());

        assert!(matches!(
            storage.read_settings(),
            Err(settings::Error::Unknown(_))
        ));
    }

    #[test]
    fn test_write_entry() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_entry(entry("A")).unwrap();
        storage.write_entry(entry("B")).unwrap();

        assert_eq!(
            storage.read_entries().unwrap(),
            VecDeque::from([entry("B"), entry("A")])
        );
    }

    #[test]
    fn test_write_entry_keeps_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        for i in 0..=log::CAPACITY {
            storage.write_entry(entry(&i.to_string())).unwrap();
        }

        let entries = storage.read_entries().unwrap();
        assert_eq!(entries.len(), log::CAPACITY);
        assert_eq!(entries.back(), Some(&entry("1")));
    }
}
