//! The [logging] section
//!
//! Where threebody's own log lines go besides the status line or stderr:
//! an optional JSON file under `file_dir`, rolled over by `file_rotation`.

use serde::Deserialize;
use std::path::PathBuf;

/// Levels accepted for `logging.level`
const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// How often the log file is rolled over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file, appended forever
    Never,
}

impl LogRotation {
    pub const ALL: [LogRotation; 3] = [Self::Hourly, Self::Daily, Self::Never];

    /// Parse a config-file name; `None` if it names no rotation
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rotation| rotation.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Name used in the config file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Resolved [logging] settings
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Filter level for the `threebody` target; RUST_LOG wins when set
    pub level: String,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem; the appender adds the date suffix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::default(),
            file_prefix: "threebody".to_string(),
        }
    }
}

/// The [logging] section as written in the file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<PathBuf>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Fill in the section from the file, warning about values it cannot use
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let level = match file.level {
            Some(level) if LEVELS.contains(&level.trim().to_lowercase().as_str()) => {
                level.trim().to_lowercase()
            }
            Some(level) => {
                eprintln!(
                    "Warning: unknown logging.level {:?}, using {}",
                    level, defaults.level
                );
                defaults.level
            }
            None => defaults.level,
        };

        let file_rotation = match file.file_rotation {
            Some(name) => LogRotation::from_name(&name).unwrap_or_else(|| {
                eprintln!(
                    "Warning: unknown logging.file_rotation {:?}, using {}",
                    name,
                    defaults.file_rotation.as_str()
                );
                defaults.file_rotation
            }),
            None => defaults.file_rotation,
        };

        let file_prefix = match file.file_prefix {
            Some(prefix) if prefix.trim().is_empty() => {
                eprintln!(
                    "Warning: logging.file_prefix is empty, using {}",
                    defaults.file_prefix
                );
                defaults.file_prefix
            }
            Some(prefix) => prefix,
            None => defaults.file_prefix,
        };

        Self {
            level,
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.unwrap_or(defaults.file_dir),
            file_rotation,
            file_prefix,
        }
    }
}
