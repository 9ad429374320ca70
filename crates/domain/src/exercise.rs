use std::slice::Iter;

use derive_more::Deref;
use strum::{AsRefStr, EnumString};
use uuid::Uuid;

use crate::{ExerciseSet, ExerciseSetID, Name, Property, WeightUnit, WorkoutID, parse_raw};

const MUSCLE_SEPARATOR: &str = ",";

/// An exercise performed within a workout.
///
/// Category, equipment and primary muscles were added to the persisted record
/// after its first version. They are kept as raw strings and exposed through
/// typed accessors that fall back to defaults for absent or unknown values.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub category_raw: Option<String>,
    pub equipment_raw: Option<String>,
    pub primary_muscles_raw: Option<String>,
    pub notes: String,
    pub workout_id: Option<WorkoutID>,
    pub sets: Vec<ExerciseSet>,
}

impl Exercise {
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self {
            id: Uuid::new_v4().into(),
            name,
            category_raw: None,
            equipment_raw: None,
            primary_muscles_raw: None,
            notes: String::new(),
            workout_id: None,
            sets: vec![],
        }
    }

    #[must_use]
    pub fn category(&self) -> ExerciseCategory {
        parse_raw(self.category_raw.as_deref()).unwrap_or_default()
    }

    pub fn set_category(&mut self, category: ExerciseCategory) {
        self.category_raw = Some(category.as_ref().to_string());
    }

    #[must_use]
    pub fn equipment(&self) -> Equipment {
        parse_raw(self.equipment_raw.as_deref()).unwrap_or_default()
    }

    pub fn set_equipment(&mut self, equipment: Equipment) {
        self.equipment_raw = Some(equipment.as_ref().to_string());
    }

    /// Unknown tokens in the stored list are skipped.
    #[must_use]
    pub fn primary_muscles(&self) -> Vec<MuscleGroup> {
        self.primary_muscles_raw
            .as_deref()
            .map(|raw| {
                raw.split(MUSCLE_SEPARATOR)
                    .filter_map(|token| parse_raw(Some(token.trim())))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn set_primary_muscles(&mut self, muscles: &[MuscleGroup]) {
        self.primary_muscles_raw = Some(
            muscles
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(MUSCLE_SEPARATOR),
        );
    }

    /// Adds a set and points its back-reference to this exercise.
    pub fn add_set(&mut self, mut set: ExerciseSet) -> &mut ExerciseSet {
        set.exercise_id = Some(self.id);
        self.sets.push(set);
        let index = self.sets.len() - 1;
        &mut self.sets[index]
    }

    pub fn remove_set(&mut self, id: ExerciseSetID) -> Option<ExerciseSet> {
        let index = self.sets.iter().position(|s| s.id == id)?;
        let mut set = self.sets.remove(index);
        set.exercise_id = None;
        Some(set)
    }

    #[must_use]
    pub fn next_set_number(&self) -> u32 {
        self.sets
            .iter()
            .map(|s| s.set_number)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }

    #[must_use]
    pub fn sorted_sets(&self) -> Vec<&ExerciseSet> {
        let mut sets = self.sets.iter().collect::<Vec<_>>();
        sets.sort_by_key(|s| s.set_number);
        sets
    }

    /// Sum of set volumes in their stored units, without unit normalization.
    #[must_use]
    pub fn total_volume(&self) -> f32 {
        self.sets.iter().map(ExerciseSet::volume).sum()
    }

    #[must_use]
    pub fn total_volume_in(&self, unit: WeightUnit) -> f32 {
        self.sets.iter().map(|s| s.volume_in(unit)).sum()
    }

    #[must_use]
    pub fn total_reps(&self) -> u32 {
        self.sets.iter().map(|s| s.reps).sum()
    }

    #[must_use]
    pub fn total_duration(&self) -> u32 {
        self.sets.iter().filter_map(|s| s.duration).sum()
    }

    #[must_use]
    pub fn max_weight(&self) -> f32 {
        self.sets.iter().map(|s| s.weight).fold(0.0, f32::max)
    }

    #[must_use]
    pub fn max_reps(&self) -> u32 {
        self.sets.iter().map(|s| s.reps).max().unwrap_or(0)
    }

    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn summary(&self) -> String {
        let sets = self.total_sets();
        let mut summary = pluralize(sets, "set", "sets");

        if self.category() == ExerciseCategory::Timed && sets > 0 {
            summary.push_str(&format!(" • {}s", self.total_duration()));
            return summary;
        }

        let reps = self.total_reps();
        summary.push_str(" • ");
        summary.push_str(&pluralize(reps as usize, "rep", "reps"));

        if self.category() == ExerciseCategory::Weighted {
            if let Some(first) = self.sets.first() {
                summary.push_str(&format!(" • max {} {}", self.max_weight(), first.unit));
            }
        }

        summary
    }
}

fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum ExerciseCategory {
    #[default]
    Weighted,
    Bodyweight,
    Timed,
}

impl Property for ExerciseCategory {
    fn iter() -> Iter<'static, ExerciseCategory> {
        static CATEGORY: [ExerciseCategory; 3] = [
            ExerciseCategory::Weighted,
            ExerciseCategory::Bodyweight,
            ExerciseCategory::Timed,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExerciseCategory::Weighted => "Weighted",
            ExerciseCategory::Bodyweight => "Bodyweight",
            ExerciseCategory::Timed => "Timed",
        }
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Kettlebell,
    Machine,
    Cable,
    Bodyweight,
    ResistanceBand,
    SmithMachine,
    EzBar,
    TrapBar,
    #[default]
    Other,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 11] = [
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::Cable,
            Equipment::Bodyweight,
            Equipment::ResistanceBand,
            Equipment::SmithMachine,
            Equipment::EzBar,
            Equipment::TrapBar,
            Equipment::Other,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::Cable => "Cable",
            Equipment::Bodyweight => "Bodyweight",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::SmithMachine => "Smith Machine",
            Equipment::EzBar => "EZ Bar",
            Equipment::TrapBar => "Trap Bar",
            Equipment::Other => "Other",
        }
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "camelCase")]
pub enum MuscleGroup {
    // Upper body
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    // Core
    Abs,
    Obliques,
    LowerBack,
    // Back detail
    Traps,
    Lats,
    // Lower body
    Glutes,
    Quads,
    Hamstrings,
    Calves,
    FullBody,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLES: [MuscleGroup; 16] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearms,
            MuscleGroup::Abs,
            MuscleGroup::Obliques,
            MuscleGroup::LowerBack,
            MuscleGroup::Traps,
            MuscleGroup::Lats,
            MuscleGroup::Glutes,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Calves,
            MuscleGroup::FullBody,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Obliques => "Obliques",
            MuscleGroup::LowerBack => "Lower Back",
            MuscleGroup::Traps => "Traps",
            MuscleGroup::Lats => "Lats",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::FullBody => "Full Body",
        }
    }
}
