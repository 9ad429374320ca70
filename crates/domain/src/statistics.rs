use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Days, NaiveDate};

use crate::{WeightUnit, Workout};

/// Aggregates across a set of workouts, with all weights converted to `unit`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub unit: WeightUnit,
    pub workouts: usize,
    pub sets: usize,
    pub reps: u32,
    pub volume: f32,
    /// Heaviest set per exercise. Names are grouped case-insensitively and
    /// keyed by the spelling of their earliest occurrence.
    pub personal_bests: BTreeMap<String, PersonalBest>,
    /// Volume per week, keyed by the Monday starting the week.
    pub weekly_volume: BTreeMap<NaiveDate, f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalBest {
    pub weight: f32,
    pub reps: u32,
    pub date: NaiveDate,
}

impl Statistics {
    #[must_use]
    pub fn from_workouts(workouts: &[Workout], unit: WeightUnit) -> Self {
        let mut sorted = workouts.iter().collect::<Vec<_>>();
        sorted.sort_by_key(|w| w.date);

        let mut personal_bests: BTreeMap<String, PersonalBest> = BTreeMap::new();
        let mut spellings: HashMap<String, String> = HashMap::new();
        let mut weekly_volume: BTreeMap<NaiveDate, f32> = BTreeMap::new();

        for workout in &sorted {
            let date = workout.date.date();
            *weekly_volume.entry(week_start(date)).or_insert(0.0) +=
                workout.total_volume_in(unit);

            for exercise in &workout.exercises {
                let key = spellings
                    .entry(exercise.name.as_str().to_lowercase())
                    .or_insert_with(|| exercise.name.to_string())
                    .clone();

                for set in &exercise.sets {
                    let weight = set.weight_in(unit);
                    if weight <= 0.0 {
                        continue;
                    }
                    let is_better = personal_bests
                        .get(&key)
                        .is_none_or(|best| weight > best.weight);
                    if is_better {
                        personal_bests.insert(
                            key.clone(),
                            PersonalBest {
                                weight,
                                reps: set.reps,
                                date,
                            },
                        );
                    }
                }
            }
        }

        Self {
            unit,
            workouts: workouts.len(),
            sets: workouts.iter().map(Workout::total_sets).sum(),
            reps: workouts.iter().map(Workout::total_reps).sum(),
            volume: workouts.iter().map(|w| w.total_volume_in(unit)).sum(),
            personal_bests,
            weekly_volume,
        }
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}
