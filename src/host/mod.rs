//! Host capability layer
//!
//! The commands never touch the file system, clipboard, or terminal
//! directly. Each capability is a trait so the commands can run against
//! the real machine (`fs`, `clipboard`, `console`) or against fakes in tests.

pub(crate) mod clipboard;
pub(crate) mod console;
pub(crate) mod fs;

use std::path::Path;

use serde_json::Value;

use crate::core::{ActiveFile, Notice};
use crate::error::HostError;

/// Resolves the currently focused file
pub(crate) trait Workspace {
    fn active_file(&self) -> Option<ActiveFile>;
}

/// Renames files on behalf of the commands
pub(crate) trait FileManager {
    fn rename(&self, file: &ActiveFile, new_path: &Path) -> Result<(), HostError>;
}

pub(crate) trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), HostError>;
}

/// Fire-and-forget user notification
pub(crate) trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Durable storage for the plugin's settings object.
///
/// The store is opaque: it returns whatever was last saved (or `None` on
/// first run). Merging with defaults happens in the caller.
pub(crate) trait SettingsStore {
    fn load(&self) -> Result<Option<Value>, HostError>;
    fn save(&self, data: &Value) -> Result<(), HostError>;
}

/// Bundle of the capabilities a plugin instance is wired to
#[derive(Clone, Copy)]
pub(crate) struct Host<'a> {
    pub(crate) workspace: &'a dyn Workspace,
    pub(crate) files: &'a dyn FileManager,
    pub(crate) clipboard: &'a dyn Clipboard,
    pub(crate) notifier: &'a dyn Notifier,
    pub(crate) store: &'a dyn SettingsStore,
}
