use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;
mod processing;

pub use processing::{
    DEFAULT_LUNCH_DURATION, DEFAULT_LUNCH_MAX, DEFAULT_LUNCH_MIN, DEFAULT_SHIFT_THRESHOLD_HOURS,
    IDENTIFY_SHIFT_THRESHOLD_HOURS, MAX_DURATION_MINUTES, MAX_THRESHOLD_HOURS, ProcessingConfig,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_threshold")]
    pub shift_threshold_hours: f64,
    #[serde(default = "default_identify_threshold")]
    pub identify_threshold_hours: f64,
    #[serde(default = "default_min_lunch")]
    pub lunch_min_duration: i64,
    #[serde(default = "default_max_lunch")]
    pub lunch_max_duration: i64,
    #[serde(default = "default_lunch")]
    pub default_lunch_duration: i64,
    #[serde(default = "default_format")]
    pub default_format: ExportFormat,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_threshold() -> f64 {
    DEFAULT_SHIFT_THRESHOLD_HOURS
}
fn default_identify_threshold() -> f64 {
    IDENTIFY_SHIFT_THRESHOLD_HOURS
}
fn default_min_lunch() -> i64 {
    DEFAULT_LUNCH_MIN
}
fn default_max_lunch() -> i64 {
    DEFAULT_LUNCH_MAX
}
fn default_lunch() -> i64 {
    DEFAULT_LUNCH_DURATION
}
fn default_format() -> ExportFormat {
    ExportFormat::Xlsx
}
fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shift_threshold_hours: default_threshold(),
            identify_threshold_hours: default_identify_threshold(),
            lunch_min_duration: default_min_lunch(),
            lunch_max_duration: default_max_lunch(),
            default_lunch_duration: default_lunch(),
            default_format: default_format(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftrecon")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftrecon")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftrecon.conf")
    }

    /// Load configuration from `path` (or the standard file); defaults if missing.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.processing().validate()?;
        cfg.identification().validate()?;
        Ok(cfg)
    }

    /// Write the default configuration file (never overwrites an existing one).
    pub fn init(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() {
            return Ok(path);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        fs::write(&path, yaml).map_err(|_| AppError::ConfigSave)?;
        success(format!("Config file: {}", path.display()));
        Ok(path)
    }

    /// Engine parameters of the full-detail and daily-worker modes.
    pub fn processing(&self) -> ProcessingConfig {
        ProcessingConfig {
            shift_threshold_hours: self.shift_threshold_hours,
            lunch_min_duration: self.lunch_min_duration,
            lunch_max_duration: self.lunch_max_duration,
            default_lunch_duration: self.default_lunch_duration,
        }
    }

    /// Engine parameters of the shift-identification mode.
    pub fn identification(&self) -> ProcessingConfig {
        self.processing()
            .with_threshold(self.identify_threshold_hours)
    }
}
