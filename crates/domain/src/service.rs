use log::{debug, error};

use crate::{
    CreateError, DeleteError, Name, ReadError, Statistics, UpdateError,
    ValidationError, WeightUnit, Workout, WorkoutID, WorkoutRepository,
};

pub trait WorkoutService {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn get_workout(&self, id: WorkoutID) -> Result<Workout, ReadError>;
    fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
    fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError>;
    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;

    fn get_statistics(&self, unit: WeightUnit) -> Result<Statistics, ReadError> {
        Ok(Statistics::from_workouts(&self.get_workouts()?, unit))
    }

    fn validate_exercise_name(&self, name: &str) -> Result<Name, ValidationError> {
        Name::new(name).map_err(|err| ValidationError::Invalid(err.to_string()))
    }

    fn validate_set_reps(&self, reps: &str) -> Result<u32, ValidationError> {
        reps.trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::Invalid("Reps must be a whole number".to_string()))
    }

    fn validate_set_weight(&self, weight: &str) -> Result<f32, ValidationError> {
        match weight.replace(',', ".").trim().parse::<f32>() {
            Ok(parsed_weight) => {
                if parsed_weight >= 0.0 && parsed_weight.is_finite() {
                    Ok(parsed_weight)
                } else {
                    Err(ValidationError::Invalid(
                        "Weight must not be negative".to_string(),
                    ))
                }
            }
            Err(_) => Err(ValidationError::Invalid(
                "Weight must be a decimal number".to_string(),
            )),
        }
    }
}

pub struct Service<R> {
    repository: R,
}

impl<R: WorkoutRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($result: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::NotFound => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

macro_rules! log_on_create_error {
    ($result: expr, $entity: literal) => {{
        let result = $result;
        if let Err(ref err) = result {
            error!("failed to create {}: {err}", $entity);
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(self.repository.read_workouts(), ReadError, "get", "workouts")
    }

    fn get_workout(&self, id: WorkoutID) -> Result<Workout, ReadError> {
        log_on_error!(self.repository.read_workout(id), ReadError, "get", "workout")
    }

    fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
        log_on_create_error!(self.repository.create_workout(workout), "workout")
    }

    fn replace_workout(&self, workout: Workout) -> Result<Workout, UpdateError> {
        log_on_error!(
            self.repository.replace_workout(workout),
            UpdateError,
            "replace",
            "workout"
        )
    }

    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(id),
            DeleteError,
            "delete",
            "workout"
        )
    }
}
