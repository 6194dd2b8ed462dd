use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timestamp \"{input}\" (expected epoch milliseconds)")]
    InvalidInput { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid value for setting \"{key}\": {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("Unknown command: {id}")]
    UnknownCommand { id: String },

    #[error("Failed to read settings: {0}")]
    SettingsRead(HostError),

    #[error("Failed to save settings: {0}")]
    SettingsWrite(HostError),

    #[error("Malformed settings: {0}")]
    SettingsMalformed(String),
}

/// Failures raised by a host capability (file system, clipboard, data file).
#[derive(Debug, Error)]
pub(crate) enum HostError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} already exists", .0.display())]
    TargetExists(PathBuf),

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Clipboard program not found: {0}")]
    ClipboardNotFound(String),

    #[error("No clipboard program available (tried {0})")]
    ClipboardUnavailable(String),

    #[error("Clipboard program {program} failed: {message}")]
    ClipboardCommand { program: String, message: String },
}
