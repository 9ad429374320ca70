//! Persisted shapes of the workout graph.
//!
//! Every entity is stored flat and refers to its owner by id. Fields added
//! after the first schema version carry `#[serde(default)]`, and enumerations
//! are stored by their raw string so that older documents keep loading.

use chrono::NaiveDateTime;
use liftlog_domain as domain;
use uuid::Uuid;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: Uuid,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub transcription: Option<String>,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: *value.id,
            date: value.date,
            notes: value.notes.clone(),
            transcription: value.transcription.clone(),
        }
    }
}

impl From<Workout> for domain::Workout {
    fn from(value: Workout) -> Self {
        Self {
            id: value.id.into(),
            date: value.date,
            notes: value.notes,
            transcription: value.transcription,
            exercises: vec![],
            media: vec![],
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub primary_muscles: Option<String>,
    #[serde(default)]
    pub notes: String,
}

impl Exercise {
    pub fn new(value: &domain::Exercise, workout_id: domain::WorkoutID) -> Self {
        Self {
            id: *value.id,
            workout_id: *workout_id,
            name: value.name.to_string(),
            category: value.category_raw.clone(),
            equipment: value.equipment_raw.clone(),
            primary_muscles: value.primary_muscles_raw.clone(),
            notes: value.notes.clone(),
        }
    }
}

impl From<Exercise> for domain::Exercise {
    fn from(value: Exercise) -> Self {
        Self {
            id: value.id.into(),
            name: domain::Name::from_stored(value.name),
            category_raw: value.category,
            equipment_raw: value.equipment,
            primary_muscles_raw: value.primary_muscles,
            notes: value.notes,
            workout_id: Some(value.workout_id.into()),
            sets: vec![],
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseSet {
    pub id: Uuid,
    pub exercise_id: Uuid,
    pub set_number: u32,
    pub reps: u32,
    pub weight: f32,
    pub unit: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub set_type: Option<String>,
    #[serde(default)]
    pub rpe: Option<f32>,
    #[serde(default)]
    pub rir: Option<u32>,
    #[serde(default)]
    pub rest_time: Option<u32>,
    #[serde(default)]
    pub tempo: Option<String>,
    #[serde(default)]
    pub grip_type: Option<String>,
    #[serde(default)]
    pub stance_type: Option<String>,
}

impl ExerciseSet {
    pub fn new(value: &domain::ExerciseSet, exercise_id: domain::ExerciseID) -> Self {
        Self {
            id: *value.id,
            exercise_id: *exercise_id,
            set_number: value.set_number,
            reps: value.reps,
            weight: value.weight,
            unit: value.unit.as_ref().to_string(),
            duration: value.duration,
            set_type: Some(value.set_type.as_ref().to_string()),
            rpe: value.rpe,
            rir: value.rir,
            rest_time: value.rest_time,
            tempo: value.tempo.clone(),
            grip_type: value.grip_type_raw.clone(),
            stance_type: value.stance_type_raw.clone(),
        }
    }
}

impl From<ExerciseSet> for domain::ExerciseSet {
    fn from(value: ExerciseSet) -> Self {
        Self {
            id: value.id.into(),
            exercise_id: Some(value.exercise_id.into()),
            set_number: value.set_number,
            reps: value.reps,
            weight: value.weight,
            unit: value.unit.parse().unwrap_or_default(),
            duration: value.duration,
            set_type: value
                .set_type
                .and_then(|set_type| set_type.parse().ok())
                .unwrap_or_default(),
            rpe: value.rpe,
            rir: value.rir,
            rest_time: value.rest_time,
            tempo: value.tempo,
            grip_type_raw: value.grip_type,
            stance_type_raw: value.stance_type,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutMedia {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub filename: String,
    pub media_type: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub caption: Option<String>,
}

impl WorkoutMedia {
    pub fn new(value: &domain::WorkoutMedia, workout_id: domain::WorkoutID) -> Self {
        Self {
            id: *value.id,
            workout_id: *workout_id,
            filename: value.filename.clone(),
            media_type: value.media_type.as_ref().to_string(),
            created_at: value.created_at,
            caption: value.caption.clone(),
        }
    }
}

impl From<WorkoutMedia> for domain::WorkoutMedia {
    fn from(value: WorkoutMedia) -> Self {
        Self {
            id: value.id.into(),
            workout_id: Some(value.workout_id.into()),
            filename: value.filename,
            media_type: value.media_type.parse().unwrap_or_default(),
            created_at: value.created_at,
            caption: value.caption,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::{BENCH_PRESS, WORKOUT};

    use super::*;

    #[test]
    fn test_workout_from() {
        let workout = domain::Workout::from(Workout::from(&*WORKOUT));
        assert_eq!(workout.id, WORKOUT.id);
        assert_eq!(workout.date, WORKOUT.date);
        assert_eq!(workout.notes, WORKOUT.notes);
        assert_eq!(workout.transcription, WORKOUT.transcription);
        assert!(workout.exercises.is_empty());
        assert!(workout.media.is_empty());
    }

    #[test]
    fn test_exercise_from() {
        let exercise = domain::Exercise::from(Exercise::new(&BENCH_PRESS, WORKOUT.id));
        assert_eq!(
            domain::Exercise {
                sets: BENCH_PRESS.sets.clone(),
                ..exercise
            },
            domain::Exercise {
                workout_id: Some(WORKOUT.id),
                ..BENCH_PRESS.clone()
            }
        );
    }

    #[rstest]
    #[case::empty(String::new())]
    #[case::untrimmed(String::from("  Bench Press "))]
    #[case::long("A".repeat(120))]
    fn test_exercise_from_keeps_stored_name(#[case] name: String) {
        let mut record = Exercise::new(&BENCH_PRESS, WORKOUT.id);
        record.name.clone_from(&name);

        let exercise = domain::Exercise::from(record.clone());

        assert_eq!(exercise.name.as_str(), name);
        assert_eq!(Exercise::new(&exercise, WORKOUT.id), record);
    }

    #[test]
    fn test_exercise_deserialize_first_schema_version() {
        let record: Exercise = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "workout_id": "00000000-0000-0000-0000-000000000002",
            "name": "Bench Press"
        }))
        .unwrap();
        let exercise = domain::Exercise::from(record);

        assert_eq!(exercise.category(), domain::ExerciseCategory::Weighted);
        assert_eq!(exercise.equipment(), domain::Equipment::Other);
        assert_eq!(exercise.primary_muscles(), Vec::<domain::MuscleGroup>::new());
        assert_eq!(exercise.notes, "");
        assert_eq!(exercise.workout_id, Some(2.into()));
    }

    #[test]
    fn test_exercise_set_from() {
        let set = &BENCH_PRESS.sets[0];
        assert_eq!(
            domain::ExerciseSet::from(ExerciseSet::new(set, BENCH_PRESS.id)),
            domain::ExerciseSet {
                exercise_id: Some(BENCH_PRESS.id),
                ..set.clone()
            }
        );
    }

    #[rstest]
    #[case::first_schema_version(json!({}), domain::SetType::Normal, None, None)]
    #[case::current_schema_version(
        json!({"set_type": "dropSet", "grip_type": "neutral", "stance_type": "sumo"}),
        domain::SetType::DropSet,
        Some(domain::GripType::Neutral),
        Some(domain::StanceType::Sumo)
    )]
    #[case::unknown_values(
        json!({"set_type": "giant", "grip_type": "thumbless", "stance_type": "lunge"}),
        domain::SetType::Normal,
        None,
        None
    )]
    fn test_exercise_set_deserialize(
        #[case] fields: serde_json::Value,
        #[case] set_type: domain::SetType,
        #[case] grip_type: Option<domain::GripType>,
        #[case] stance_type: Option<domain::StanceType>,
    ) {
        let mut value = json!({
            "id": "00000000-0000-0000-0000-000000000003",
            "exercise_id": "00000000-0000-0000-0000-000000000001",
            "set_number": 1,
            "reps": 5,
            "weight": 100.0,
            "unit": "kg"
        });
        if let (Some(value), Some(fields)) = (value.as_object_mut(), fields.as_object()) {
            value.extend(fields.clone());
        }

        let set = domain::ExerciseSet::from(serde_json::from_value::<ExerciseSet>(value).unwrap());

        assert_eq!(set.unit, domain::WeightUnit::Kg);
        assert_eq!(set.set_type, set_type);
        assert_eq!(set.grip_type(), grip_type);
        assert_eq!(set.stance_type(), stance_type);
        assert_eq!(set.duration, None);
        assert_eq!(set.rpe, None);
    }

    #[test]
    fn test_exercise_set_serde() {
        let obj = ExerciseSet::new(&BENCH_PRESS.sets[1], BENCH_PRESS.id);
        let serialized = json!(obj);
        assert_eq!(serialized["unit"], "lbs");
        assert_eq!(serialized["set_type"], "normal");
        assert_eq!(serialized["grip_type"], "overhand");
        let deserialized: ExerciseSet = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, obj);
    }

    #[test]
    fn test_workout_media_from() {
        let media = &WORKOUT.media[0];
        assert_eq!(
            domain::WorkoutMedia::from(WorkoutMedia::new(media, WORKOUT.id)),
            media.clone()
        );
    }

    #[test]
    fn test_workout_media_unknown_type() {
        let mut record = WorkoutMedia::new(&WORKOUT.media[0], WORKOUT.id);
        record.media_type = String::from("hologram");
        assert_eq!(
            domain::WorkoutMedia::from(record).media_type,
            domain::MediaType::Photo
        );
    }
}
