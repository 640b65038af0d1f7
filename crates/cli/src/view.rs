use std::{
    collections::{BTreeSet, VecDeque},
    fmt::Write,
};

use chrono::{Datelike, Months, NaiveDate, Weekday};
use gymlog_app::log;
use gymlog_domain as domain;

pub fn workout(workout: &domain::Workout) -> String {
    let mut result = workout.date.format(domain::form::DATE_FORMAT).to_string();
    if let Some(name) = &workout.name {
        let _ = write!(result, "  {name}");
    }
    let _ = writeln!(result, "  [{}]", workout.id);
    for exercise in &workout.exercises {
        let _ = writeln!(result, "  {}", exercise.name);
        result.push_str(&sets(&exercise.sets, "    "));
    }
    if let Some(notes) = &workout.notes {
        let _ = writeln!(result, "  Notes: {notes}");
    }
    result
}

pub fn sets(sets: &[domain::Set], indent: &str) -> String {
    sets.iter()
        .enumerate()
        .fold(String::new(), |mut result, (index, set)| {
            let _ = writeln!(
                result,
                "{indent}Set {}: {} kg × {} reps",
                set.display_number(index),
                set.weight,
                set.reps
            );
            result
        })
}

pub fn summary(summary: &domain::Summary) -> String {
    format!(
        "Total workouts:  {}\nLast workout:    {}\nThis month:      {}\n{}",
        summary.total_workouts,
        summary
            .last_workout_date
            .map_or_else(|| "-".to_string(), |date| date.to_string()),
        summary.workouts_this_month,
        frequency(&summary.frequency)
    )
}

pub fn frequency(frequency: &domain::TrainingFrequency) -> String {
    format!(
        "Per week:        {:.1}\nPer month:       {:.1}\n",
        frequency.per_week, frequency.per_month
    )
}

/// A month view starting on Monday, with training days marked by `*`.
pub fn calendar(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> String {
    let first = today.with_day(1).unwrap_or(today);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|date| date.pred_opt())
        .unwrap_or(first);

    let mut result = format!("{}\n", first.format("%B %Y"));
    let mut row = String::new();
    for weekday in [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ] {
        let _ = write!(row, "{:<4}", &weekday.to_string()[..2]);
    }
    let _ = writeln!(result, "{}", row.trim_end());

    let mut day = first.week(Weekday::Mon).first_day();
    let end = last.week(Weekday::Mon).last_day();
    row.clear();
    while day <= end {
        if day.month() == first.month() {
            let mark = if dates.contains(&day) { '*' } else { ' ' };
            let _ = write!(row, "{:>2}{mark} ", day.day());
        } else {
            row.push_str("    ");
        }
        if day.weekday() == Weekday::Sun {
            let _ = writeln!(result, "{}", row.trim_end());
            row.clear();
        }
        let Some(next) = day.succ_opt() else {
            break;
        };
        day = next;
    }

    result
}

pub fn personal_records(records: &domain::PersonalRecords) -> String {
    format!(
        "Max weight:      {}\nMax reps:        {}\nMax volume:      {}\n",
        records
            .max_weight
            .map_or_else(|| "-".to_string(), |weight| format!("{weight} kg")),
        records
            .max_reps
            .map_or_else(|| "-".to_string(), |reps| reps.to_string()),
        records
            .max_volume
            .map_or_else(|| "-".to_string(), |volume| format!("{volume} kg")),
    )
}

pub fn progression(points: &[domain::ProgressionPoint]) -> String {
    points.iter().fold(String::new(), |mut result, point| {
        let _ = writeln!(
            result,
            "{}  max {} kg  avg {} kg",
            point.date, point.max_weight, point.avg_weight
        );
        result
    })
}

pub fn ranking(counts: &[domain::ExerciseCount]) -> String {
    counts
        .iter()
        .enumerate()
        .fold(String::new(), |mut result, (index, count)| {
            let _ = writeln!(result, "{:>2}. {} ({})", index + 1, count.name, count.count);
            result
        })
}

pub fn log_entries(entries: &VecDeque<log::Entry>) -> String {
    entries.iter().fold(String::new(), |mut result, entry| {
        let _ = writeln!(
            result,
            "{} {:<5} {}",
            entry.time,
            entry.level.as_str().to_lowercase(),
            entry.message
        );
        result
    })
}
