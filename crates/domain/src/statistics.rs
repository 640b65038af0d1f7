use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::{Name, Reps, Set, Weight, Workout, WorkoutID};

pub const DEFAULT_MOST_COMMON_LIMIT: usize = 5;

/// How a stored name is compared with a user-supplied query.
///
/// Both sides are trimmed in either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    Exact,
    IgnoreCase,
}

impl NameMatch {
    #[must_use]
    pub fn matches(self, candidate: &str, query: &str) -> bool {
        let candidate = candidate.trim();
        let query = query.trim();
        match self {
            NameMatch::Exact => candidate == query,
            NameMatch::IgnoreCase => candidate.to_lowercase() == query.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseHistoryItem {
    pub date: NaiveDate,
    pub workout_id: WorkoutID,
    pub exercise_name: Name,
    pub sets: Vec<Set>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PersonalRecords {
    pub max_weight: Option<Weight>,
    pub max_reps: Option<Reps>,
    pub max_volume: Option<f32>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TrainingFrequency {
    pub per_week: f32,
    pub per_month: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressionPoint {
    pub date: NaiveDate,
    pub max_weight: f32,
    pub avg_weight: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl Interval {
    /// The smallest interval containing all given dates.
    #[must_use]
    pub fn enclosing(dates: impl IntoIterator<Item = NaiveDate>) -> Option<Self> {
        dates.into_iter().fold(None, |interval, date| match interval {
            None => Some(Interval {
                first: date,
                last: date,
            }),
            Some(Interval { first, last }) => Some(Interval {
                first: first.min(date),
                last: last.max(date),
            }),
        })
    }
}

/// Key figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_workouts: usize,
    pub last_workout_date: Option<NaiveDate>,
    pub workouts_this_month: usize,
    pub frequency: TrainingFrequency,
}

impl Summary {
    #[must_use]
    pub fn new(workouts: &[Workout], today: NaiveDate) -> Self {
        Self {
            total_workouts: total_workouts(workouts),
            last_workout_date: last_workout_date(workouts),
            workouts_this_month: workouts_in_month(workouts, today.year(), today.month()),
            frequency: training_frequency(workouts),
        }
    }
}

/// All distinct exercise names in ascending order.
///
/// Names differing only in case are distinct entries.
#[must_use]
pub fn exercise_names(workouts: &[Workout]) -> BTreeSet<String> {
    workouts
        .iter()
        .flat_map(|w| &w.exercises)
        .map(|e| e.name.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Every logged occurrence of an exercise, newest first.
///
/// The name has to match exactly (apart from surrounding whitespace).
#[must_use]
pub fn exercise_history(workouts: &[Workout], exercise_name: &str) -> Vec<ExerciseHistoryItem> {
    exercise_history_matching(workouts, exercise_name, NameMatch::Exact)
}

#[must_use]
pub fn exercise_history_matching(
    workouts: &[Workout],
    exercise_name: &str,
    name_match: NameMatch,
) -> Vec<ExerciseHistoryItem> {
    let mut history = workouts
        .iter()
        .flat_map(|workout| {
            workout
                .exercises
                .iter()
                .filter(move |e| {
                    !e.sets.is_empty() && name_match.matches(e.name.as_str(), exercise_name)
                })
                .map(move |e| ExerciseHistoryItem {
                    date: workout.date,
                    workout_id: workout.id,
                    exercise_name: e.name.clone(),
                    sets: e.sets.clone(),
                })
        })
        .collect::<Vec<_>>();
    history.sort_by(|a, b| b.date.cmp(&a.date));
    history
}

/// The most recent occurrence of an exercise, ignoring case.
#[must_use]
pub fn last_workout_for_exercise(
    workouts: &[Workout],
    exercise_name: &str,
) -> Option<ExerciseHistoryItem> {
    if exercise_name.trim().is_empty() {
        return None;
    }

    exercise_history_matching(workouts, exercise_name, NameMatch::IgnoreCase)
        .into_iter()
        .next()
}

/// The most recent non-empty workout with the given name, ignoring case.
#[must_use]
pub fn last_workout_by_name<'a>(workouts: &'a [Workout], workout_name: &str) -> Option<&'a Workout> {
    if workout_name.trim().is_empty() {
        return None;
    }

    let mut matching = workouts
        .iter()
        .filter(|w| {
            !w.exercises.is_empty()
                && w.name
                    .as_ref()
                    .is_some_and(|name| NameMatch::IgnoreCase.matches(name.as_str(), workout_name))
        })
        .collect::<Vec<_>>();
    matching.sort_by(|a, b| b.date.cmp(&a.date));
    matching.into_iter().next()
}

#[must_use]
pub fn personal_records(workouts: &[Workout], exercise_name: &str) -> PersonalRecords {
    let mut records = PersonalRecords::default();

    for set in workouts
        .iter()
        .flat_map(|w| &w.exercises)
        .filter(|e| NameMatch::Exact.matches(e.name.as_str(), exercise_name))
        .flat_map(|e| &e.sets)
    {
        if records.max_weight.is_none_or(|max| set.weight > max) {
            records.max_weight = Some(set.weight);
        }
        if records.max_reps.is_none_or(|max| set.reps > max) {
            records.max_reps = Some(set.reps);
        }
        let volume = set.volume();
        if volume > 0.0 && records.max_volume.is_none_or(|max| volume > max) {
            records.max_volume = Some(volume);
        }
    }

    records
}

#[must_use]
pub fn total_workouts(workouts: &[Workout]) -> usize {
    workouts.len()
}

/// Average number of workouts per week and per 30-day month.
///
/// The observed span runs from the first to the last workout date and counts
/// at least one day. If all workouts share a single date, the raw count is
/// reported for both values.
#[must_use]
pub fn training_frequency(workouts: &[Workout]) -> TrainingFrequency {
    let Some(interval) = Interval::enclosing(workouts.iter().map(|w| w.date)) else {
        return TrainingFrequency::default();
    };

    #[allow(clippy::cast_precision_loss)]
    let count = workouts.len() as f32;
    let span = (interval.last - interval.first).num_days();

    if span == 0 {
        return TrainingFrequency {
            per_week: count,
            per_month: count,
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let days = span.max(1) as f32;
    let weeks = days / 7.0;
    let months = days / 30.0;

    TrainingFrequency {
        per_week: if weeks > 0.0 {
            round_to_one_decimal(count / weeks)
        } else {
            count
        },
        per_month: if months > 0.0 {
            round_to_one_decimal(count / months)
        } else {
            count
        },
    }
}

/// Exercises ranked by the number of workouts they appear in.
///
/// Exercises with equal counts keep the order in which they were first seen.
#[must_use]
pub fn most_common_exercises(workouts: &[Workout], limit: usize) -> Vec<ExerciseCount> {
    let mut counts: Vec<ExerciseCount> = vec![];
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for exercise in workouts.iter().flat_map(|w| &w.exercises) {
        let name = exercise.name.as_str().trim();
        if name.is_empty() {
            continue;
        }
        if let Some(&i) = positions.get(name) {
            counts[i].count += 1;
        } else {
            positions.insert(name, counts.len());
            counts.push(ExerciseCount {
                name: name.to_string(),
                count: 1,
            });
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

#[must_use]
pub fn workouts_by_date_desc(workouts: &[Workout]) -> Vec<&Workout> {
    let mut sorted = workouts.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

#[must_use]
pub fn last_workout_date(workouts: &[Workout]) -> Option<NaiveDate> {
    workouts.iter().map(|w| w.date).max()
}

#[must_use]
pub fn workouts_in_month(workouts: &[Workout], year: i32, month: u32) -> usize {
    workouts
        .iter()
        .filter(|w| w.date.year() == year && w.date.month() == month)
        .count()
}

#[must_use]
pub fn workout_dates(workouts: &[Workout]) -> BTreeSet<NaiveDate> {
    workouts.iter().map(|w| w.date).collect()
}

/// Maximum and average weight of each session, oldest first.
#[must_use]
pub fn progression(history: &[ExerciseHistoryItem]) -> Vec<ProgressionPoint> {
    let mut points = history
        .iter()
        .filter(|item| !item.sets.is_empty())
        .map(|item| {
            let weights = item
                .sets
                .iter()
                .map(|s| f32::from(s.weight))
                .collect::<Vec<_>>();
            #[allow(clippy::cast_precision_loss)]
            let avg_weight = weights.iter().sum::<f32>() / weights.len() as f32;
            ProgressionPoint {
                date: item.date,
                max_weight: weights.iter().copied().fold(f32::MIN, f32::max),
                avg_weight: round_to_one_decimal(avg_weight),
            }
        })
        .collect::<Vec<_>>();
    points.sort_by_key(|p| p.date);
    points
}

fn round_to_one_decimal(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
