use std::path::PathBuf;

use directories::ProjectDirs;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

const DATA_FILE_NAME: &str = "workouts.json";
const LOG_FILE_NAME: &str = "log.json";
const SETTINGS_FILE_NAME: &str = "settings.toml";

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, String>;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub data_file: Option<PathBuf>,
    pub log_level: LogLevel,
    pub most_common_limit: usize,
    pub theme: Theme,
}

impl Settings {
    /// The workout file, either as configured or in the platform data directory.
    #[must_use]
    pub fn data_file(&self) -> Option<PathBuf> {
        self.data_file
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().join(DATA_FILE_NAME)))
    }

    /// The log file, placed next to the workout file.
    #[must_use]
    pub fn log_file(&self) -> Option<PathBuf> {
        self.data_file().map(|path| path.with_file_name(LOG_FILE_NAME))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: None,
            log_level: LogLevel::Info,
            most_common_limit: gymlog_domain::DEFAULT_MOST_COMMON_LIMIT,
            theme: Theme::Light,
        }
    }
}

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[must_use]
pub fn default_settings_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "gymlog")
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.log_level, LogLevel::Info);
        assert_eq!(settings.most_common_limit, 5);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_settings_configured_data_file() {
        let settings = Settings {
            data_file: Some(PathBuf::from("/tmp/w.json")),
            ..Settings::default()
        };
        assert_eq!(settings.data_file(), Some(PathBuf::from("/tmp/w.json")));
        assert_eq!(settings.log_file(), Some(PathBuf::from("/tmp/log.json")));
    }

    #[rstest]
    #[case("warn", LogLevel::Warn, LevelFilter::Warn)]
    #[case("off", LogLevel::Off, LevelFilter::Off)]
    #[case("trace", LogLevel::Trace, LevelFilter::Trace)]
    fn test_log_level(
        #[case] input: &str,
        #[case] expected: LogLevel,
        #[case] filter: LevelFilter,
    ) {
        assert_eq!(LogLevel::from_str(input), Ok(expected));
        assert_eq!(expected.to_string(), input);
        assert_eq!(LevelFilter::from(expected), filter);
    }

    #[rstest]
    #[case("light", Theme::Light)]
    #[case("dark", Theme::Dark)]
    fn test_theme(#[case] input: &str, #[case] expected: Theme) {
        assert_eq!(Theme::from_str(input), Ok(expected));
        assert_eq!(expected.to_string(), input);
    }
}
