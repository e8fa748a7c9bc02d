//! Unified application error type.
//! The engine itself never fails (unusable rows are skipped); errors come
//! from the boundaries: reading/decoding tables, configuration and export.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input tables
    // ---------------------------
    #[error("Unreadable file / Arquivo ilegível: {0}")]
    Decode(String),

    #[error("No usable rows / Nenhuma linha utilizável: {0}")]
    EmptyTable(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
