#![warn(clippy::pedantic)]

pub mod chart;
pub mod log;
pub mod settings;

pub use settings::{LogLevel, Settings, SettingsRepository, Theme};
