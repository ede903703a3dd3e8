use crate::error::{Error, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default zero-padding width for output file names
pub const DEFAULT_NAME_WIDTH: usize = 7;

/// Name of the label index written inside the output directory
pub const DEFAULT_LABELS_FILE_NAME: &str = "labels.csv";

const MAX_NAME_WIDTH: usize = 20;

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Map the configured level onto the `log` crate's filter
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Configuration for a curation run
///
/// The validation thresholds are fixed by the rule set and are not part of
/// the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory receiving accepted images and the label index
    pub output_dir: PathBuf,

    /// File receiving one line per rejected input
    pub log_file: PathBuf,

    /// Zero-padding width of the sequential output names
    pub name_width: usize,

    /// File name of the label index inside `output_dir`
    pub labels_file_name: String,

    /// Whether to draw a progress bar on stderr
    pub show_progress: bool,

    /// Log level
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./validated_pictures"),
            log_file: PathBuf::from("./validation_log.txt"),
            name_width: DEFAULT_NAME_WIDTH,
            labels_file_name: DEFAULT_LABELS_FILE_NAME.to_string(),
            show_progress: false,
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|e| Error::Configuration(format!("Failed to open config file: {}", e)))?;

        let config: Config = serde_json::from_reader(file)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .map_err(|e| Error::Configuration(format!("Failed to create config file: {}", e)))?;

        serde_json::to_writer_pretty(file, self)
            .map_err(|e| Error::Configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.name_width == 0 || self.name_width > MAX_NAME_WIDTH {
            return Err(Error::Configuration(format!(
                "Output name width must be between 1 and {}",
                MAX_NAME_WIDTH
            )));
        }

        if self.labels_file_name.trim().is_empty() {
            return Err(Error::Configuration(
                "Label index file name must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Full path of the label index
    pub fn labels_path(&self) -> PathBuf {
        self.output_dir.join(&self.labels_file_name)
    }
}
