#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
pub mod form;
mod name;
mod service;
pub mod statistics;
mod workout;

pub use error::*;
pub use form::{ExerciseForm, SetForm, WorkoutForm};
pub use name::*;
pub use service::*;
pub use statistics::{
    DEFAULT_MOST_COMMON_LIMIT, ExerciseCount, ExerciseHistoryItem, Interval, NameMatch,
    PersonalRecords, ProgressionPoint, Summary, TrainingFrequency,
};
pub use workout::*;
