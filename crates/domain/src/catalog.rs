use crate::{Equipment, Exercise, ExerciseCategory, MuscleGroup, Name};

/// A suggestion from the bundled exercise database.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: Name,
    pub equipment: Equipment,
    pub primary_muscles: Vec<MuscleGroup>,
}

impl CatalogEntry {
    /// Creates an exercise prefilled from this entry.
    #[must_use]
    pub fn to_exercise(&self) -> Exercise {
        let mut exercise = Exercise::new(self.name.clone());
        exercise.set_equipment(self.equipment);
        exercise.set_primary_muscles(&self.primary_muscles);
        if self.equipment == Equipment::Bodyweight {
            exercise.set_category(ExerciseCategory::Bodyweight);
        }
        exercise
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let query = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.as_str().to_lowercase().contains(&query))
            .collect()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name.matches(name))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry {
                name: Name::new("Bench Press").unwrap(),
                equipment: Equipment::Barbell,
                primary_muscles: vec![MuscleGroup::Chest],
            },
            CatalogEntry {
                name: Name::new("Incline Dumbbell Press").unwrap(),
                equipment: Equipment::Dumbbell,
                primary_muscles: vec![MuscleGroup::Chest, MuscleGroup::Shoulders],
            },
            CatalogEntry {
                name: Name::new("Push Up").unwrap(),
                equipment: Equipment::Bodyweight,
                primary_muscles: vec![MuscleGroup::Chest, MuscleGroup::Triceps],
            },
        ])
    }

    #[rstest]
    #[case("", vec!["Bench Press", "Incline Dumbbell Press", "Push Up"])]
    #[case("  press ", vec!["Bench Press", "Incline Dumbbell Press"])]
    #[case("PUSH", vec!["Push Up"])]
    #[case("deadlift", vec![])]
    fn test_catalog_search(#[case] query: &str, #[case] expected: Vec<&str>) {
        assert_eq!(
            catalog()
                .search(query)
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_catalog_get() {
        let catalog = catalog();
        assert_eq!(
            catalog.get("push up").map(|e| e.equipment),
            Some(Equipment::Bodyweight)
        );
        assert_eq!(catalog.get("push"), None);
    }

    #[test]
    fn test_catalog_entry_to_exercise() {
        let catalog = catalog();

        let bench_press = catalog.get("Bench Press").unwrap().to_exercise();
        assert_eq!(bench_press.name.as_str(), "Bench Press");
        assert_eq!(bench_press.category(), ExerciseCategory::Weighted);
        assert_eq!(bench_press.equipment(), Equipment::Barbell);
        assert_eq!(bench_press.primary_muscles(), vec![MuscleGroup::Chest]);

        let push_up = catalog.get("Push Up").unwrap().to_exercise();
        assert_eq!(push_up.category(), ExerciseCategory::Bodyweight);
        assert!(push_up.sets.is_empty());
    }
}
