use std::{
    collections::VecDeque,
    ops::DerefMut,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub const MAX_ENTRIES: usize = 100;

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

static CONSOLE_LEVEL: Mutex<LevelFilter> = Mutex::new(LevelFilter::Warn);

/// Keeps the most recent log entries for later diagnosis.
///
/// Implementations must not log themselves.
#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// Install the logger.
///
/// Messages up to `console_level` are printed to stderr. Messages up to
/// `Info` are additionally stored in `storage`, regardless of the console
/// level.
///
/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(
    storage: Arc<Mutex<dyn Repository>>,
    console_level: LevelFilter,
) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    if let Ok(mut log) = LOG.lock() {
        *log = Some(storage);
    }
    if let Ok(mut level) = CONSOLE_LEVEL.lock() {
        *level = console_level;
    }
    log::set_max_level(console_level.max(LevelFilter::Info));
    Ok(())
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();

        if CONSOLE_LEVEL
            .lock()
            .is_ok_and(|level| record.level() <= *level)
        {
            eprintln!("{}: {message}", record.level().as_str().to_lowercase());
        }

        if record.level() <= Level::Info {
            if let Ok(log) = LOG.lock() {
                if let Some(ref log) = *log {
                    if let Ok(mut repository) = log.lock() {
                        let _ = repository.deref_mut().write_entry(Entry {
                            time: Local::now().format("%b %d %H:%M:%S").to_string(),
                            level: record.level(),
                            message,
                        });
                    }
                }
            }
        }
    }

    fn flush(&self) {}
}
