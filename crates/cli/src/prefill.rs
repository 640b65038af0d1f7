use anyhow::{Result, bail};
use chrono::NaiveDate;
use gymlog_domain::{self as domain, statistics};
use log::warn;

use crate::parse;

pub struct LogArgs {
    pub date: String,
    pub name: Option<String>,
    pub exercises: Vec<String>,
    pub notes: Option<String>,
    pub repeat: bool,
}

/// Build the form for a new workout from the command line arguments.
///
/// With `repeat`, the form starts from the last workout with the given name.
/// Exercises given without sets take the sets of their last session, matched
/// case-insensitively.
pub fn workout_form(
    workouts: &[domain::Workout],
    args: LogArgs,
    today: NaiveDate,
) -> Result<domain::WorkoutForm> {
    let mut form = match (&args.name, args.repeat) {
        (Some(name), true) => match statistics::last_workout_by_name(workouts, name) {
            Some(workout) => domain::WorkoutForm::from_template(workout, today),
            None => bail!("no previous workout named \"{name}\""),
        },
        _ => domain::WorkoutForm::default(),
    };

    form.date = args.date;
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(notes) = args.notes {
        form.notes = notes;
    }

    for input in &args.exercises {
        let mut exercise = parse::exercise(input)?;
        if exercise.sets.is_empty() {
            match statistics::last_workout_for_exercise(workouts, &exercise.name) {
                Some(item) => {
                    exercise.sets = domain::ExerciseForm::from_history(&item).sets;
                }
                None => warn!("no previous sets of {}", exercise.name),
            }
        }
        form.exercises.push(exercise);
    }

    Ok(form)
}
