use log::error;

use crate::{
    CreateError, DeleteError, NewWorkout, ReadError, Workout, WorkoutID, WorkoutRepository,
};

pub trait WorkoutService {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn create_workout(&self, workout: NewWorkout) -> Result<Workout, CreateError>;
    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
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
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(self.repository.read_workouts(), "get", "workouts")
    }

    fn create_workout(&self, workout: NewWorkout) -> Result<Workout, CreateError> {
        log_on_error!(self.repository.create_workout(workout), "create", "workout")
    }

    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(self.repository.delete_workout(id), "delete", "workout")
    }
}
