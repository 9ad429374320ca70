#![allow(clippy::missing_errors_doc)]

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;
use uuid::Uuid;

use liftlog_domain as domain;

use crate::record::{Exercise, ExerciseSet, Workout, WorkoutMedia};

/// Workout graphs kept as one JSON document per object store.
#[derive(Clone, Debug)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, object_store: Store) -> PathBuf {
        self.root.join(format!("{}.json", object_store.as_ref()))
    }

    /// An object store that was never written is empty.
    pub fn get_all<V: DeserializeOwned>(
        &self,
        object_store: Store,
    ) -> Result<Vec<V>, JsonStoreError> {
        match fs::read(self.path(object_store)) {
            Ok(content) => Ok(serde_json::from_slice(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(vec![]),
            Err(err) => Err(err.into()),
        }
    }

    pub fn replace_all<V: Serialize>(
        &self,
        object_store: Store,
        values: &[V],
    ) -> Result<(), JsonStoreError> {
        fs::create_dir_all(&self.root)?;
        let path = self.path(object_store);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(values)?)?;
        fs::rename(&tmp, &path)?;
        debug!("wrote {} records to {}", values.len(), path.display());
        Ok(())
    }

    fn modify<V, F>(&self, object_store: Store, f: F) -> Result<(), JsonStoreError>
    where
        V: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<V>),
    {
        let mut values = self.get_all(object_store)?;
        f(&mut values);
        self.replace_all(object_store, &values)
    }

    fn contains_workout(&self, id: domain::WorkoutID) -> Result<bool, JsonStoreError> {
        Ok(self
            .get_all::<Workout>(Store::Workouts)?
            .iter()
            .any(|w| w.id == *id))
    }

    fn read_graphs(&self) -> Result<Vec<domain::Workout>, JsonStoreError> {
        let workouts = self.get_all::<Workout>(Store::Workouts)?;

        let mut sets: BTreeMap<Uuid, Vec<domain::ExerciseSet>> = BTreeMap::new();
        for set in self.get_all::<ExerciseSet>(Store::Sets)? {
            sets.entry(set.exercise_id).or_default().push(set.into());
        }

        let mut exercises: BTreeMap<Uuid, Vec<domain::Exercise>> = BTreeMap::new();
        for record in self.get_all::<Exercise>(Store::Exercises)? {
            let workout_id = record.workout_id;
            let mut exercise = domain::Exercise::from(record);
            exercise.sets = sets.remove(&exercise.id).unwrap_or_default();
            exercises.entry(workout_id).or_default().push(exercise);
        }

        let mut media: BTreeMap<Uuid, Vec<domain::WorkoutMedia>> = BTreeMap::new();
        for record in self.get_all::<WorkoutMedia>(Store::Media)? {
            media.entry(record.workout_id).or_default().push(record.into());
        }

        let mut result = workouts
            .into_iter()
            .map(|record| {
                let id = record.id;
                let mut workout = domain::Workout::from(record);
                workout.exercises = exercises.remove(&id).unwrap_or_default();
                workout.media = media.remove(&id).unwrap_or_default();
                workout
            })
            .collect::<Vec<_>>();
        result.sort_by_key(|w| w.date);

        Ok(result)
    }

    /// Child records that belong to any workout other than `id`.
    fn foreign_children(
        &self,
        id: domain::WorkoutID,
    ) -> Result<BTreeSet<(Store, Uuid)>, JsonStoreError> {
        let exercises = self.get_all::<Exercise>(Store::Exercises)?;
        let own_exercises = exercises
            .iter()
            .filter(|e| e.workout_id == *id)
            .map(|e| e.id)
            .collect::<BTreeSet<_>>();

        let mut children = exercises
            .iter()
            .filter(|e| e.workout_id != *id)
            .map(|e| (Store::Exercises, e.id))
            .collect::<BTreeSet<_>>();
        children.extend(
            self.get_all::<ExerciseSet>(Store::Sets)?
                .into_iter()
                .filter(|s| !own_exercises.contains(&s.exercise_id))
                .map(|s| (Store::Sets, s.id)),
        );
        children.extend(
            self.get_all::<WorkoutMedia>(Store::Media)?
                .into_iter()
                .filter(|m| m.workout_id != *id)
                .map(|m| (Store::Media, m.id)),
        );
        Ok(children)
    }

    /// Whether `workout` reuses a child id, either one owned by another
    /// workout or one occurring twice within `workout` itself.
    fn reuses_child_ids(&self, workout: &domain::Workout) -> Result<bool, JsonStoreError> {
        let foreign = self.foreign_children(workout.id)?;
        let mut seen = BTreeSet::new();
        let reused = workout
            .exercises
            .iter()
            .flat_map(|e| {
                std::iter::once((Store::Exercises, *e.id))
                    .chain(e.sets.iter().map(|s| (Store::Sets, *s.id)))
            })
            .chain(workout.media.iter().map(|m| (Store::Media, *m.id)))
            .any(|child| foreign.contains(&child) || !seen.insert(child));
        if reused {
            warn!("workout {} reuses ids of existing records", *workout.id);
        }
        Ok(reused)
    }

    fn write_graph(&self, workout: &domain::Workout) -> Result<(), JsonStoreError> {
        self.modify(Store::Sets, |sets: &mut Vec<ExerciseSet>| {
            for exercise in &workout.exercises {
                sets.extend(exercise.sets.iter().map(|s| ExerciseSet::new(s, exercise.id)));
            }
        })?;
        self.modify(Store::Exercises, |exercises: &mut Vec<Exercise>| {
            exercises.extend(
                workout
                    .exercises
                    .iter()
                    .map(|e| Exercise::new(e, workout.id)),
            );
        })?;
        self.modify(Store::Media, |media: &mut Vec<WorkoutMedia>| {
            media.extend(workout.media.iter().map(|m| WorkoutMedia::new(m, workout.id)));
        })?;
        self.modify(Store::Workouts, |workouts: &mut Vec<Workout>| {
            workouts.push(Workout::from(workout));
        })
    }

    fn delete_graph(&self, id: domain::WorkoutID) -> Result<(), JsonStoreError> {
        let exercise_ids = self
            .get_all::<Exercise>(Store::Exercises)?
            .into_iter()
            .filter(|e| e.workout_id == *id)
            .map(|e| e.id)
            .collect::<Vec<_>>();
        self.modify(Store::Sets, |sets: &mut Vec<ExerciseSet>| {
            sets.retain(|s| !exercise_ids.contains(&s.exercise_id));
        })?;
        self.modify(Store::Exercises, |exercises: &mut Vec<Exercise>| {
            exercises.retain(|e| e.workout_id != *id);
        })?;
        self.modify(Store::Media, |media: &mut Vec<WorkoutMedia>| {
            media.retain(|m| m.workout_id != *id);
        })?;
        self.modify(Store::Workouts, |workouts: &mut Vec<Workout>| {
            workouts.retain(|w| w.id != *id);
        })
    }
}

impl domain::WorkoutRepository for JsonStore {
    fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        Ok(self.read_graphs().map_err(domain::StorageError::from)?)
    }

    fn read_workout(&self, id: domain::WorkoutID) -> Result<domain::Workout, domain::ReadError> {
        self.read_graphs()
            .map_err(domain::StorageError::from)?
            .into_iter()
            .find(|w| w.id == id)
            .ok_or(domain::ReadError::NotFound)
    }

    fn create_workout(
        &self,
        workout: domain::Workout,
    ) -> Result<domain::Workout, domain::CreateError> {
        if self
            .contains_workout(workout.id)
            .map_err(domain::StorageError::from)?
        {
            return Err(domain::CreateError::Conflict);
        }
        if self
            .reuses_child_ids(&workout)
            .map_err(domain::StorageError::from)?
        {
            return Err(domain::CreateError::Conflict);
        }
        self.write_graph(&workout)
            .map_err(domain::StorageError::from)?;
        Ok(workout)
    }

    fn replace_workout(
        &self,
        workout: domain::Workout,
    ) -> Result<domain::Workout, domain::UpdateError> {
        if !self
            .contains_workout(workout.id)
            .map_err(domain::StorageError::from)?
        {
            return Err(domain::UpdateError::NotFound);
        }
        if self
            .reuses_child_ids(&workout)
            .map_err(domain::StorageError::from)?
        {
            return Err(domain::UpdateError::Conflict);
        }
        self.delete_graph(workout.id)
            .map_err(domain::StorageError::from)?;
        self.write_graph(&workout)
            .map_err(domain::StorageError::from)?;
        Ok(workout)
    }

    fn delete_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutID, domain::DeleteError> {
        if !self.contains_workout(id).map_err(domain::StorageError::from)? {
            return Err(domain::DeleteError::NotFound);
        }
        self.delete_graph(id).map_err(domain::StorageError::from)?;
        Ok(id)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum JsonStoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<JsonStoreError> for domain::StorageError {
    fn from(value: JsonStoreError) -> Self {
        domain::StorageError::Other(Box::new(value))
    }
}

#[derive(AsRefStr, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[strum(serialize_all = "snake_case")]
pub enum Store {
    Workouts,
    Exercises,
    Sets,
    Media,
}
