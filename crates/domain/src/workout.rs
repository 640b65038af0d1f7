use chrono::NaiveDate;
use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{CreateError, DeleteError, Name, ReadError};

pub trait WorkoutRepository {
    fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn create_workout(&self, workout: NewWorkout) -> Result<Workout, CreateError>;
    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

/// One logged training session.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub date: NaiveDate,
    pub name: Option<Name>,
    pub exercises: Vec<Exercise>,
    pub notes: Option<String>,
}

/// A workout which has not been stored yet.
///
/// The id is assigned by the repository unless the caller already supplies one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub id: Option<WorkoutID>,
    pub date: NaiveDate,
    pub name: Option<Name>,
    pub exercises: Vec<Exercise>,
    pub notes: Option<String>,
}

impl NewWorkout {
    #[must_use]
    pub fn into_workout(self, fallback_id: WorkoutID) -> Workout {
        Workout {
            id: self.id.unwrap_or(fallback_id),
            date: self.date,
            name: self.name,
            exercises: self.exercises,
            notes: self.notes,
        }
    }
}

#[derive(Deref, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
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

impl std::fmt::Display for WorkoutID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for WorkoutID {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value.trim())?))
    }
}

/// One movement performed within a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: Name,
    pub sets: Vec<Set>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Set {
    pub set_number: Option<SetNumber>,
    pub weight: Weight,
    pub reps: Reps,
}

impl Set {
    #[must_use]
    pub fn volume(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let reps = u32::from(self.reps) as f32;
        f32::from(self.weight) * reps
    }

    /// The label shown for the set at `index` within its exercise.
    ///
    /// Falls back to the 1-based position if the user did not number the set.
    #[must_use]
    pub fn display_number(&self, index: usize) -> u32 {
        match self.set_number {
            Some(set_number) => u32::from(set_number),
            None => u32::try_from(index + 1).unwrap_or(u32::MAX),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetNumber(u32);

impl SetNumber {
    pub fn new(value: u32) -> Result<Self, SetNumberError> {
        if value == 0 {
            return Err(SetNumberError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for SetNumber {
    type Error = SetNumberError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => SetNumber::new(parsed_value),
            Err(_) => Err(SetNumberError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetNumberError {
    #[error("Set number must be a positive integer")]
    OutOfRange,
    #[error("Set number must be an integer")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.replace(',', ".").trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be greater than zero")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if value == 0 {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be greater than zero")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}
