//! Core types shared by the commands and the host capabilities

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

/// The file currently focused in the host, resolved fresh for every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ActiveFile {
    /// File name without the extension
    pub(crate) basename: String,
    /// Extension without the leading dot, empty when there is none
    pub(crate) extension: String,
    pub(crate) path: PathBuf,
    /// Creation time in epoch milliseconds
    pub(crate) creation_timestamp: i64,
}

impl ActiveFile {
    pub(crate) fn new(path: impl Into<PathBuf>, creation_timestamp: i64) -> Self {
        let path = path.into();
        let basename = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            basename,
            extension,
            path,
            creation_timestamp,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

/// User-toggleable actions that can be switched off in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Feature {
    CopyToClipboard,
    AppendToFileName,
}

impl Feature {
    fn label(self) -> &'static str {
        match self {
            Feature::CopyToClipboard => "Copying creation time to clipboard",
            Feature::AppendToFileName => "Appending creation time to file name",
        }
    }
}

/// Outcome of a command, surfaced to the user by the host notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Notice {
    Copied { text: String },
    Renamed { new_name: String },
    NoActiveFile,
    FeatureDisabled(Feature),
    RenameFailed,
    ClipboardFailed,
    InvalidTimestamp,
}

impl Notice {
    /// Whether the notice reports a failed command (as opposed to success or a no-op)
    pub(crate) fn is_failure(&self) -> bool {
        matches!(
            self,
            Notice::NoActiveFile
                | Notice::RenameFailed
                | Notice::ClipboardFailed
                | Notice::InvalidTimestamp
        )
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Notice::Copied { .. } => "copied",
            Notice::Renamed { .. } => "renamed",
            Notice::NoActiveFile => "no_active_file",
            Notice::FeatureDisabled(_) => "disabled",
            Notice::RenameFailed => "rename_failed",
            Notice::ClipboardFailed => "clipboard_failed",
            Notice::InvalidTimestamp => "invalid_timestamp",
        }
    }

    pub(crate) fn to_json(&self) -> Value {
        let mut value = json!({
            "kind": self.kind(),
            "ok": !self.is_failure(),
            "message": self.to_string(),
        });
        match self {
            Notice::Copied { text } => value["text"] = json!(text),
            Notice::Renamed { new_name } => value["new_name"] = json!(new_name),
            _ => {}
        }
        value
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Copied { text } => write!(f, "Copied creation time to clipboard: {text}"),
            Notice::Renamed { new_name } => write!(f, "Renamed file to {new_name}"),
            Notice::NoActiveFile => write!(f, "No active file"),
            Notice::FeatureDisabled(feature) => write!(f, "{} is disabled", feature.label()),
            Notice::RenameFailed => write!(f, "Failed to rename file"),
            Notice::ClipboardFailed => write!(f, "Failed to copy creation time to clipboard"),
            Notice::InvalidTimestamp => write!(f, "Creation time is not a valid timestamp"),
        }
    }
}
