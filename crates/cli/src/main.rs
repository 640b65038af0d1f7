#![warn(clippy::pedantic)]

//! Log workouts and follow your progress from the command line.
//!
//! ```bash
//! gymlog log --name "Push Day" --exercise "Bench Press=80x5,2:85x3"
//! gymlog log --name "Push Day" --repeat
//! gymlog exercise "Bench Press" --chart bench.svg
//! gymlog stats --limit 10
//! ```

mod parse;
mod prefill;
mod view;

use std::{
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::{Result, anyhow, bail};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use gymlog_app::{Settings, SettingsRepository, log::Repository as _, settings};
use gymlog_domain::{self as domain, WorkoutService, statistics};
use gymlog_storage::{
    json_file::{JsonFile, JsonFileLog},
    settings_file::TomlFile,
};
use log::{info, warn};
use prefill::LogArgs;

#[derive(Parser)]
#[command(name = "gymlog", about = "Personal workout log", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Workout data file override
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Settings file override
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Show key figures and the current month (default)
    Dashboard,

    /// Log a workout
    Log {
        /// Date of the workout (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Name of the workout
        #[arg(long)]
        name: Option<String>,

        /// Exercise as NAME[=SET,...] with sets as [SET_NUMBER:]WEIGHTxREPS
        ///
        /// Decimal weights use a dot (12.5x10). Sets of an exercise given without
        /// sets are taken from its last session.
        #[arg(long = "exercise", short = 'e')]
        exercises: Vec<String>,

        /// Notes about the workout
        #[arg(long)]
        notes: Option<String>,

        /// Start from the last workout with the same name
        #[arg(long, requires = "name")]
        repeat: bool,
    },

    /// List all workouts, newest first
    History,

    /// Delete a workout
    Delete {
        /// Id of the workout
        id: String,
    },

    /// List all exercise names
    Exercises,

    /// Show history, personal records and progression of an exercise
    Exercise {
        /// Name of the exercise
        name: String,

        /// Write a progression chart as SVG
        #[arg(long)]
        chart: Option<PathBuf>,
    },

    /// Show training frequency and the most common exercises
    Stats {
        /// Number of exercises to rank
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show recent log messages
    Diagnostics,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = read_settings(cli.config.clone())?;
    if cli.data_file.is_some() {
        settings.data_file.clone_from(&cli.data_file);
    }

    let data_file = settings
        .data_file()
        .ok_or_else(|| anyhow!("unable to determine data directory"))?;
    let log_file = settings
        .log_file()
        .ok_or_else(|| anyhow!("unable to determine data directory"))?;

    gymlog_app::log::init(
        Arc::new(Mutex::new(JsonFileLog::new(log_file.clone()))),
        settings.log_level.into(),
    )
    .map_err(|err| anyhow!("failed to initialize logging: {err}"))?;

    let service = domain::Service::new(JsonFile::new(data_file));
    let today = Local::now().date_naive();

    match cli.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => dashboard(&service, today),
        Command::Log {
            date,
            name,
            exercises,
            notes,
            repeat,
        } => log_workout(
            &service,
            LogArgs {
                date: date.unwrap_or_else(|| today.format(domain::form::DATE_FORMAT).to_string()),
                name,
                exercises,
                notes,
                repeat,
            },
            today,
        ),
        Command::History => history(&service),
        Command::Delete { id } => delete(&service, &id).map(|_| ()),
        Command::Exercises => exercises(&service),
        Command::Exercise { name, chart } => exercise(&service, &name, chart, &settings),
        Command::Stats { limit } => stats(&service, limit.unwrap_or(settings.most_common_limit)),
        Command::Diagnostics => diagnostics(&JsonFileLog::new(log_file)),
    }
}

fn read_settings(path: Option<PathBuf>) -> Result<Settings> {
    let Some(path) = path.or_else(settings::default_settings_file) else {
        return Ok(Settings::default());
    };
    TomlFile::new(&path)
        .read_settings()
        .map_err(|err| anyhow!("failed to read settings from {}: {err}", path.display()))
}

fn workouts(service: &impl WorkoutService) -> Result<Vec<domain::Workout>> {
    service.get_workouts().map_err(|err| anyhow!("{err}"))
}

fn dashboard(service: &impl WorkoutService, today: NaiveDate) -> Result<()> {
    let workouts = workouts(service)?;
    let summary = domain::Summary::new(&workouts, today);

    print!("{}", view::summary(&summary));
    println!();
    print!(
        "{}",
        view::calendar(&statistics::workout_dates(&workouts), today)
    );

    Ok(())
}

fn log_workout(service: &impl WorkoutService, args: LogArgs, today: NaiveDate) -> Result<()> {
    let form = prefill::workout_form(&workouts(service)?, args, today)?;

    match form.assemble() {
        Ok(new_workout) => {
            let workout = service
                .create_workout(new_workout)
                .map_err(|err| anyhow!("{err}"))?;
            info!("logged workout {}", workout.id);
            print!("{}", view::workout(&workout));
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                eprintln!("{error}");
            }
            bail!("workout not saved")
        }
    }
}

fn history(service: &impl WorkoutService) -> Result<()> {
    let workouts = workouts(service)?;

    if workouts.is_empty() {
        println!("No workouts logged yet");
    }

    for (index, workout) in statistics::workouts_by_date_desc(&workouts)
        .into_iter()
        .enumerate()
    {
        if index > 0 {
            println!();
        }
        print!("{}", view::workout(workout));
    }

    Ok(())
}

/// Returns whether a workout was deleted.
fn delete(service: &impl WorkoutService, id: &str) -> Result<bool> {
    let id = domain::WorkoutID::try_from(id).map_err(|err| anyhow!("invalid id: {err}"))?;
    if !workouts(service)?.iter().any(|workout| workout.id == id) {
        warn!("no workout with id {id}");
        return Ok(false);
    }
    service
        .delete_workout(id)
        .map_err(|err| anyhow!("{err}"))?;
    info!("deleted workout {id}");
    Ok(true)
}

fn exercises(service: &impl WorkoutService) -> Result<()> {
    for name in statistics::exercise_names(&workouts(service)?) {
        println!("{name}");
    }
    Ok(())
}

fn exercise(
    service: &impl WorkoutService,
    name: &str,
    chart: Option<PathBuf>,
    settings: &Settings,
) -> Result<()> {
    let workouts = workouts(service)?;
    let history = statistics::exercise_history(&workouts, name);

    if history.is_empty() {
        bail!("no history for \"{name}\"");
    }

    print!(
        "{}",
        view::personal_records(&statistics::personal_records(&workouts, name))
    );
    println!();

    let points = statistics::progression(&history);
    print!("{}", view::progression(&points));

    for item in &history {
        println!();
        println!("{}", item.date);
        print!("{}", view::sets(&item.sets, "  "));
    }

    if let Some(path) = chart {
        match gymlog_app::chart::plot_progression(&points, settings.theme)
            .map_err(|err| anyhow!("failed to plot chart: {err}"))?
        {
            Some(svg) => {
                fs::write(&path, svg)?;
                info!("wrote chart to {}", path.display());
            }
            None => warn!("nothing to plot for {name}"),
        }
    }

    Ok(())
}

fn stats(service: &impl WorkoutService, limit: usize) -> Result<()> {
    let workouts = workouts(service)?;

    println!(
        "Total workouts:  {}",
        statistics::total_workouts(&workouts)
    );
    print!(
        "{}",
        view::frequency(&statistics::training_frequency(&workouts))
    );

    let today = Local::now().date_naive();
    println!(
        "This month:      {}",
        statistics::workouts_in_month(&workouts, today.year(), today.month())
    );

    let ranking = statistics::most_common_exercises(&workouts, limit);
    if !ranking.is_empty() {
        println!();
        print!("{}", view::ranking(&ranking));
    }

    Ok(())
}

fn diagnostics(log: &JsonFileLog) -> Result<()> {
    let entries = log.read_entries().map_err(|err| anyhow!("{err}"))?;
    print!("{}", view::log_entries(&entries));
    Ok(())
}
