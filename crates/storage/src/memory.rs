use std::sync::Mutex;

use gymlog_domain as domain;

/// Keeps workouts in memory only.
#[derive(Default)]
pub struct Memory {
    workouts: Mutex<Vec<domain::Workout>>,
}

impl Memory {
    #[must_use]
    pub fn new(workouts: Vec<domain::Workout>) -> Self {
        Self {
            workouts: Mutex::new(workouts),
        }
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, Vec<domain::Workout>>, domain::StorageError> {
        self.workouts
            .lock()
            .map_err(|err| domain::StorageError::Other(err.to_string().into()))
    }
}

impl domain::WorkoutRepository for Memory {
    fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        Ok(self.lock()?.clone())
    }

    fn create_workout(
        &self,
        workout: domain::NewWorkout,
    ) -> Result<domain::Workout, domain::CreateError> {
        let mut workouts = self.lock()?;
        if let Some(id) = workout.id {
            if workouts.iter().any(|w| w.id == id) {
                return Err(domain::CreateError::Conflict);
            }
        }
        let workout = workout.into_workout(domain::WorkoutID::new_random());
        workouts.push(workout.clone());
        Ok(workout)
    }

    fn delete_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutID, domain::DeleteError> {
        self.lock()?.retain(|w| w.id != id);
        Ok(id)
    }
}
