use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, Exercise, ExerciseID, MuscleGroup, ReadError, UpdateError,
    WeightUnit, WorkoutMedia, WorkoutMediaID,
};

pub trait WorkoutRepository {
    fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn read_workout(&self, id: WorkoutID) -> Result<Workout, ReadError>;
    fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
    fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError>;
    /// Removes the workout together with all exercises, sets and media it owns.
    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub date: NaiveDateTime,
    pub notes: Option<String>,
    pub transcription: Option<String>,
    pub exercises: Vec<Exercise>,
    pub media: Vec<WorkoutMedia>,
}

impl Workout {
    #[must_use]
    pub fn new(date: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4().into(),
            date,
            notes: None,
            transcription: None,
            exercises: vec![],
            media: vec![],
        }
    }

    pub fn add_exercise(&mut self, mut exercise: Exercise) -> &mut Exercise {
        exercise.workout_id = Some(self.id);
        self.exercises.push(exercise);
        let index = self.exercises.len() - 1;
        &mut self.exercises[index]
    }

    /// Detaches the exercise; its sets go with it.
    pub fn remove_exercise(&mut self, id: ExerciseID) -> Option<Exercise> {
        let index = self.exercises.iter().position(|e| e.id == id)?;
        let mut exercise = self.exercises.remove(index);
        exercise.workout_id = None;
        Some(exercise)
    }

    pub fn add_media(&mut self, mut media: WorkoutMedia) -> &mut WorkoutMedia {
        media.workout_id = Some(self.id);
        self.media.push(media);
        let index = self.media.len() - 1;
        &mut self.media[index]
    }

    pub fn remove_media(&mut self, id: WorkoutMediaID) -> Option<WorkoutMedia> {
        let index = self.media.iter().position(|m| m.id == id)?;
        let mut media = self.media.remove(index);
        media.workout_id = None;
        Some(media)
    }

    #[must_use]
    pub fn exercise(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name.matches(name))
    }

    #[must_use]
    pub fn contains_exercise(&self, name: &str) -> bool {
        self.exercise(name).is_some()
    }

    /// Sum of all set volumes in their stored units.
    #[must_use]
    pub fn total_volume(&self) -> f32 {
        self.exercises.iter().map(Exercise::total_volume).sum()
    }

    #[must_use]
    pub fn total_volume_in(&self, unit: WeightUnit) -> f32 {
        self.exercises.iter().map(|e| e.total_volume_in(unit)).sum()
    }

    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(Exercise::total_sets).sum()
    }

    #[must_use]
    pub fn total_reps(&self) -> u32 {
        self.exercises.iter().map(Exercise::total_reps).sum()
    }

    #[must_use]
    pub fn exercise_names(&self) -> Vec<&str> {
        self.exercises.iter().map(|e| e.name.as_str()).collect()
    }

    #[must_use]
    pub fn muscle_groups(&self) -> BTreeSet<MuscleGroup> {
        self.exercises
            .iter()
            .flat_map(Exercise::primary_muscles)
            .collect()
    }

    #[must_use]
    pub fn summary(&self) -> String {
        let exercises = self.exercises.len();
        let sets = self.total_sets();
        format!(
            "{exercises} {} • {sets} {}",
            if exercises == 1 {
                "exercise"
            } else {
                "exercises"
            },
            if sets == 1 { "set" } else { "sets" }
        )
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
