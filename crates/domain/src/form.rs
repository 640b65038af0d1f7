use chrono::NaiveDate;

use crate::{
    Exercise, ExerciseHistoryItem, Name, NewWorkout, Reps, Set, SetNumber, ValidationError,
    Weight, Workout,
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw user input for logging a workout.
///
/// All fields are kept as entered. [`WorkoutForm::assemble`] turns the input
/// into a [`NewWorkout`], dropping everything which does not amount to a valid
/// set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkoutForm {
    pub date: String,
    pub name: String,
    pub exercises: Vec<ExerciseForm>,
    pub notes: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseForm {
    pub name: String,
    pub sets: Vec<SetForm>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SetForm {
    pub set_number: String,
    pub weight: String,
    pub reps: String,
}

impl WorkoutForm {
    /// Prefill the form with all exercises and the notes of a previous workout.
    #[must_use]
    pub fn from_template(workout: &Workout, date: NaiveDate) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            name: workout
                .name
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            exercises: workout
                .exercises
                .iter()
                .map(ExerciseForm::from_exercise)
                .collect(),
            notes: workout.notes.clone().unwrap_or_default(),
        }
    }

    pub fn assemble(&self) -> Result<NewWorkout, Vec<ValidationError>> {
        let mut errors = vec![];

        let date = match self.date.trim() {
            "" => {
                errors.push(ValidationError::MissingDate);
                None
            }
            date => match NaiveDate::parse_from_str(date, DATE_FORMAT) {
                Ok(parsed_date) => Some(parsed_date),
                Err(_) => {
                    errors.push(ValidationError::InvalidDate(date.to_string()));
                    None
                }
            },
        };

        let exercises = self
            .exercises
            .iter()
            .filter_map(ExerciseForm::assemble)
            .collect::<Vec<_>>();

        if exercises.is_empty() {
            errors.push(ValidationError::NoValidExercise);
        }

        match date {
            Some(date) if errors.is_empty() => Ok(NewWorkout {
                id: None,
                date,
                name: Name::new(&self.name).ok(),
                exercises,
                notes: Some(self.notes.trim())
                    .filter(|notes| !notes.is_empty())
                    .map(ToString::to_string),
            }),
            _ => Err(errors),
        }
    }
}

impl ExerciseForm {
    /// Prefill the sets with the values of the last session of this exercise.
    #[must_use]
    pub fn from_history(item: &ExerciseHistoryItem) -> Self {
        Self {
            name: item.exercise_name.to_string(),
            sets: item.sets.iter().map(SetForm::from_set).collect(),
        }
    }

    #[must_use]
    pub fn from_exercise(exercise: &Exercise) -> Self {
        Self {
            name: exercise.name.to_string(),
            sets: exercise.sets.iter().map(SetForm::from_set).collect(),
        }
    }

    fn assemble(&self) -> Option<Exercise> {
        let name = Name::new(&self.name).ok()?;
        let sets = self
            .sets
            .iter()
            .filter_map(SetForm::assemble)
            .collect::<Vec<_>>();
        if sets.is_empty() {
            return None;
        }
        Some(Exercise { name, sets })
    }
}

impl SetForm {
    #[must_use]
    pub fn from_set(set: &Set) -> Self {
        Self {
            set_number: set
                .set_number
                .map(|n| n.to_string())
                .unwrap_or_default(),
            weight: set.weight.to_string(),
            reps: set.reps.to_string(),
        }
    }

    fn assemble(&self) -> Option<Set> {
        let weight = Weight::try_from(self.weight.as_str()).ok()?;
        let reps = Reps::try_from(self.reps.as_str()).ok()?;
        // blank or unusable labels are omitted, display falls back to the position
        let set_number = SetNumber::try_from(self.set_number.as_str()).ok();
        Some(Set {
            set_number,
            weight,
            reps,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn set_form(set_number: &str, weight: &str, reps: &str) -> SetForm {
        SetForm {
            set_number: set_number.to_string(),
            weight: weight.to_string(),
            reps: reps.to_string(),
        }
    }

    fn exercise_form(name: &str, sets: Vec<SetForm>) -> ExerciseForm {
        ExerciseForm {
            name: name.to_string(),
            sets,
        }
    }

    fn set(set_number: Option<u32>, weight: f32, reps: u32) -> Set {
        Set {
            set_number: set_number.map(|n| SetNumber::new(n).unwrap()),
            weight: Weight::new(weight).unwrap(),
            reps: Reps::new(reps).unwrap(),
        }
    }

    #[test]
    fn test_assemble() {
        let form = WorkoutForm {
            date: "2024-01-01".to_string(),
            name: "  Push Day ".to_string(),
            exercises: vec![
                exercise_form(
                    " Bench ",
                    vec![
                        set_form("", "80", "5"),
                        set_form("2", "85", "3"),
                        set_form("", "", "5"),
                        set_form("", "90", "0"),
                        set_form("", "-10", "5"),
                        set_form("", "90", "2.5"),
                    ],
                ),
                exercise_form("   ", vec![set_form("", "20", "10")]),
                exercise_form("Dips", vec![set_form("", "", "")]),
                exercise_form("Squat", vec![set_form("x", "100,5", "5")]),
            ],
            notes: "  felt strong ".to_string(),
        };
        assert_eq!(
            form.assemble(),
            Ok(NewWorkout {
                id: None,
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                name: Some(Name::new("Push Day").unwrap()),
                exercises: vec![
                    Exercise {
                        name: Name::new("Bench").unwrap(),
                        sets: vec![set(None, 80.0, 5), set(Some(2), 85.0, 3)],
                    },
                    Exercise {
                        name: Name::new("Squat").unwrap(),
                        sets: vec![set(None, 100.5, 5)],
                    },
                ],
                notes: Some("felt strong".to_string()),
            })
        );
    }

    #[test]
    fn test_assemble_omits_blank_name_and_notes() {
        let form = WorkoutForm {
            date: "2024-01-01".to_string(),
            name: " ".to_string(),
            exercises: vec![exercise_form("Row", vec![set_form("", "50", "8")])],
            notes: "\n".to_string(),
        };
        let workout = form.assemble().unwrap();
        assert_eq!(workout.name, None);
        assert_eq!(workout.notes, None);
    }

    #[rstest]
    #[case::missing_date(
        "",
        vec![exercise_form("Row", vec![set_form("", "50", "8")])],
        vec![ValidationError::MissingDate]
    )]
    #[case::invalid_date(
        "2024-02-30",
        vec![exercise_form("Row", vec![set_form("", "50", "8")])],
        vec![ValidationError::InvalidDate("2024-02-30".to_string())]
    )]
    #[case::no_exercises(
        "2024-01-01",
        vec![],
        vec![ValidationError::NoValidExercise]
    )]
    #[case::no_valid_sets(
        "2024-01-01",
        vec![exercise_form("Row", vec![set_form("1", "0", "8"), set_form("2", "50", "")])],
        vec![ValidationError::NoValidExercise]
    )]
    #[case::no_exercise_name(
        "2024-01-01",
        vec![exercise_form("", vec![set_form("", "50", "8")])],
        vec![ValidationError::NoValidExercise]
    )]
    #[case::all_errors(
        " ",
        vec![],
        vec![ValidationError::MissingDate, ValidationError::NoValidExercise]
    )]
    fn test_assemble_errors(
        #[case] date: &str,
        #[case] exercises: Vec<ExerciseForm>,
        #[case] expected: Vec<ValidationError>,
    ) {
        let form = WorkoutForm {
            date: date.to_string(),
            exercises,
            ..WorkoutForm::default()
        };
        assert_eq!(form.assemble(), Err(expected));
    }

    #[test]
    fn test_exercise_form_from_history() {
        let item = ExerciseHistoryItem {
            date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            workout_id: 2.into(),
            exercise_name: Name::new("Bench").unwrap(),
            sets: vec![set(Some(1), 90.0, 2), set(None, 82.5, 5)],
        };
        assert_eq!(
            ExerciseForm::from_history(&item),
            exercise_form(
                "Bench",
                vec![set_form("1", "90", "2"), set_form("", "82.5", "5")]
            )
        );
    }

    #[test]
    fn test_workout_form_from_template() {
        let workout = Workout {
            id: 1.into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            name: Some(Name::new("Push Day").unwrap()),
            exercises: vec![Exercise {
                name: Name::new("Bench").unwrap(),
                sets: vec![set(None, 80.0, 5)],
            }],
            notes: Some("paused reps".to_string()),
        };
        let form = WorkoutForm::from_template(&workout, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        assert_eq!(
            form,
            WorkoutForm {
                date: "2024-01-08".to_string(),
                name: "Push Day".to_string(),
                exercises: vec![exercise_form("Bench", vec![set_form("", "80", "5")])],
                notes: "paused reps".to_string(),
            }
        );
        assert_eq!(
            form.assemble().map(|w| w.exercises),
            Ok(workout.exercises.clone())
        );
    }
}
