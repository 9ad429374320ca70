#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod exercise;
mod exercise_set;
mod media;
mod name;
pub mod sample;
mod service;
mod statistics;
mod workout;

use std::{slice::Iter, str::FromStr};

pub use catalog::{Catalog, CatalogEntry};
pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError, ValidationError};
pub use exercise::{Equipment, Exercise, ExerciseCategory, ExerciseID, MuscleGroup};
pub use exercise_set::{
    ExerciseSet, ExerciseSetID, GripType, POUNDS_PER_KILOGRAM, SetType, StanceType, WeightUnit,
};
pub use media::{MEDIA_DIRECTORY, MediaType, WorkoutMedia, WorkoutMediaID, media_directory};
pub use name::{Name, NameError};
pub use service::{Service, WorkoutService};
pub use statistics::{PersonalBest, Statistics};
pub use workout::{Workout, WorkoutID, WorkoutRepository};

/// A closed set of values with human-readable names.
pub trait Property: Clone + Copy + Sized + 'static {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

/// Parses a persisted raw value, treating absent and unknown values alike.
fn parse_raw<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|raw| raw.parse().ok())
}
