//! Canned workouts for previews and tests.

use chrono::{Duration, NaiveDateTime};

use crate::{
    Equipment, Exercise, ExerciseCategory, ExerciseSet, GripType, MediaType, MuscleGroup, Name,
    SetType, StanceType, WeightUnit, Workout, WorkoutMedia,
};

/// Bench press with three sets of 10 x 135, 8 x 155 and 6 x 175 lbs.
#[must_use]
pub fn bench_press() -> Exercise {
    let mut exercise = weighted(
        "Bench Press",
        Equipment::Barbell,
        &[MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders],
    );
    for (set_number, reps, weight) in [(1, 10, 135.0), (2, 8, 155.0), (3, 6, 175.0)] {
        let set = exercise.add_set(ExerciseSet::new(set_number, reps, weight, WeightUnit::Lbs));
        set.set_grip_type(Some(GripType::Overhand));
    }
    exercise
}

/// Three workouts on consecutive days ending at `anchor`.
#[must_use]
pub fn workouts(anchor: NaiveDateTime) -> Vec<Workout> {
    vec![
        push_day(anchor - Duration::days(2)),
        pull_day(anchor - Duration::days(1)),
        conditioning_day(anchor),
    ]
}

#[must_use]
pub fn push_day(date: NaiveDateTime) -> Workout {
    let mut workout = Workout::new(date);
    workout.notes = Some("Felt strong today".to_string());
    workout.add_exercise(bench_press());

    let press = workout.add_exercise(weighted(
        "Overhead Press",
        Equipment::Barbell,
        &[MuscleGroup::Shoulders, MuscleGroup::Triceps],
    ));
    for set_number in 1..=3 {
        let set = press.add_set(ExerciseSet::new(set_number, 8, 95.0, WeightUnit::Lbs));
        set.rpe = Some(7.5);
        set.tempo = Some("2-0-1-0".to_string());
    }

    let dips = workout.add_exercise(bodyweight("Dips", &[MuscleGroup::Chest, MuscleGroup::Triceps]));
    for (set_number, reps) in [(1, 12), (2, 10)] {
        dips.add_set(ExerciseSet::new(set_number, reps, 0.0, WeightUnit::Lbs));
    }

    workout.add_media(WorkoutMedia::new(
        "bench-top-set.mov".to_string(),
        MediaType::Video,
        date,
    ));
    workout
}

#[must_use]
pub fn pull_day(date: NaiveDateTime) -> Workout {
    let mut workout = Workout::new(date);
    workout.transcription =
        Some("Deadlift three sets of five at one forty, then pull ups".to_string());

    let deadlift = workout.add_exercise(weighted(
        "Deadlift",
        Equipment::Barbell,
        &[MuscleGroup::Hamstrings, MuscleGroup::Glutes, MuscleGroup::LowerBack],
    ));
    let warmup = deadlift.add_set(ExerciseSet::new(1, 5, 60.0, WeightUnit::Kg));
    warmup.set_type = SetType::Warmup;
    for set_number in 2..=4 {
        let set = deadlift.add_set(ExerciseSet::new(set_number, 5, 140.0, WeightUnit::Kg));
        set.set_grip_type(Some(GripType::Mixed));
        set.set_stance_type(Some(StanceType::ShoulderWidth));
        set.rest_time = Some(180);
    }

    let pull_up = workout.add_exercise(bodyweight("Pull Up", &[MuscleGroup::Lats, MuscleGroup::Biceps]));
    for (set_number, reps) in [(1, 10), (2, 8), (3, 6)] {
        let set = pull_up.add_set(ExerciseSet::new(set_number, reps, 0.0, WeightUnit::Kg));
        set.rir = Some(1);
    }
    if let Some(last) = pull_up.sets.last_mut() {
        last.set_type = SetType::ToFailure;
        last.rir = Some(0);
    }
    workout
}

#[must_use]
pub fn conditioning_day(date: NaiveDateTime) -> Workout {
    let mut workout = Workout::new(date);

    let plank = workout.add_exercise(Exercise::new(name("Plank")));
    plank.set_category(ExerciseCategory::Timed);
    plank.set_primary_muscles(&[MuscleGroup::Abs, MuscleGroup::Obliques]);
    for (set_number, duration) in [(1, 60), (2, 45)] {
        plank.add_set(ExerciseSet::timed(set_number, duration));
    }

    let swing = workout.add_exercise(weighted(
        "Kettlebell Swing",
        Equipment::Kettlebell,
        &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
    ));
    for set_number in 1..=2 {
        let set = swing.add_set(ExerciseSet::new(set_number, 20, 24.0, WeightUnit::Kg));
        set.set_type = SetType::Amrap;
    }
    workout
}

fn weighted(exercise_name: &str, equipment: Equipment, muscles: &[MuscleGroup]) -> Exercise {
    let mut exercise = Exercise::new(name(exercise_name));
    exercise.set_category(ExerciseCategory::Weighted);
    exercise.set_equipment(equipment);
    exercise.set_primary_muscles(muscles);
    exercise
}

fn bodyweight(exercise_name: &str, muscles: &[MuscleGroup]) -> Exercise {
    let mut exercise = Exercise::new(name(exercise_name));
    exercise.set_category(ExerciseCategory::Bodyweight);
    exercise.set_equipment(Equipment::Bodyweight);
    exercise.set_primary_muscles(muscles);
    exercise
}

fn name(name: &str) -> Name {
    Name::new(name).unwrap_or_else(|_| unreachable!("sample names are valid"))
}
