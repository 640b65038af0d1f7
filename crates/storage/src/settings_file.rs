use std::{fs, path::PathBuf};

use gymlog_app::{Settings, SettingsRepository};

/// Settings stored as a TOML file.
pub struct TomlFile {
    path: PathBuf,
}

impl TomlFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsRepository for TomlFile {
    fn read_settings(&self) -> Result<Settings, String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => toml::from_str(&content).map_err(|err| err.to_string()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(err) => Err(err.to_string()),
        }
    }
}
