use std::{fs, io::ErrorKind, path::Path};

use log::{debug, warn};
use serde::Deserialize;

use liftlog_domain as domain;

use crate::json_store::JsonStoreError;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry {
    name: String,
    #[serde(default)]
    equipment: Option<String>,
    #[serde(default)]
    primary_muscles: Vec<String>,
}

impl TryFrom<CatalogEntry> for domain::CatalogEntry {
    type Error = domain::NameError;

    fn try_from(value: CatalogEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::new(&value.name)?,
            equipment: value
                .equipment
                .and_then(|equipment| equipment.parse().ok())
                .unwrap_or_default(),
            primary_muscles: value
                .primary_muscles
                .iter()
                .filter_map(|muscle| muscle.parse().ok())
                .collect(),
        })
    }
}

/// Loads the exercise database bundled with the app. A missing file yields an
/// empty catalog.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of entries.
pub fn load_catalog(path: &Path) -> Result<domain::Catalog, JsonStoreError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_catalog(&content),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("no exercise database at {}", path.display());
            Ok(domain::Catalog::default())
        }
        Err(err) => Err(err.into()),
    }
}

/// Entries with an invalid name are skipped.
///
/// # Errors
///
/// Returns an error if `json` is not an array of entries.
pub fn parse_catalog(json: &str) -> Result<domain::Catalog, JsonStoreError> {
    let entries = serde_json::from_str::<Vec<CatalogEntry>>(json)?
        .into_iter()
        .filter_map(|entry| {
            let name = entry.name.clone();
            domain::CatalogEntry::try_from(entry)
                .inspect_err(|err| warn!("skipping catalog entry {name:?}: {err}"))
                .ok()
        })
        .collect::<Vec<_>>();
    debug!("loaded {} catalog entries", entries.len());
    Ok(domain::Catalog::new(entries))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::tests::data::CATALOG;

    use super::*;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog(CATALOG).unwrap();

        assert_eq!(
            catalog
                .entries()
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Bench Press", "Goblet Squat", "Pull Up", "Sled Push", "Plank"]
        );
        assert_eq!(
            catalog.get("goblet squat").unwrap(),
            &domain::CatalogEntry {
                name: domain::Name::new("Goblet Squat").unwrap(),
                equipment: domain::Equipment::Kettlebell,
                primary_muscles: vec![domain::MuscleGroup::Quads, domain::MuscleGroup::Glutes],
            }
        );
    }

    #[test]
    fn test_parse_catalog_unknown_values() {
        let catalog = parse_catalog(CATALOG).unwrap();

        let sled_push = catalog.get("Sled Push").unwrap();
        assert_eq!(sled_push.equipment, domain::Equipment::Other);
        assert_eq!(sled_push.primary_muscles, vec![domain::MuscleGroup::Quads]);

        let plank = catalog.get("Plank").unwrap();
        assert_eq!(plank.equipment, domain::Equipment::Other);
        assert_eq!(plank.primary_muscles, Vec::<domain::MuscleGroup>::new());
    }

    #[test]
    fn test_parse_catalog_bodyweight_entry() {
        let exercise = parse_catalog(CATALOG)
            .unwrap()
            .get("pull up")
            .unwrap()
            .to_exercise();

        assert_eq!(exercise.category(), domain::ExerciseCategory::Bodyweight);
        assert_eq!(exercise.equipment(), domain::Equipment::Bodyweight);
    }

    #[test]
    fn test_parse_catalog_invalid_document() {
        assert!(matches!(
            parse_catalog(r#"{"name": "Bench Press"}"#),
            Err(JsonStoreError::Json(_))
        ));
    }

    #[test]
    fn test_load_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ExerciseDatabase.json");
        fs::write(&path, CATALOG).unwrap();

        assert_eq!(load_catalog(&path).unwrap(), parse_catalog(CATALOG).unwrap());
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(
            load_catalog(&dir.path().join("ExerciseDatabase.json"))
                .unwrap()
                .is_empty()
        );
    }
}
