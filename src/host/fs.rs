//! File-system backed capabilities: active file lookup, rename, settings data file

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;
use tracing::debug;

use super::{FileManager, SettingsStore, Workspace};
use crate::core::ActiveFile;
use crate::error::HostError;

/// Treats the path given on the command line as the focused file.
pub(crate) struct FsWorkspace {
    path: Option<PathBuf>,
}

impl FsWorkspace {
    pub(crate) fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl Workspace for FsWorkspace {
    fn active_file(&self) -> Option<ActiveFile> {
        let path = self.path.as_ref()?;
        match stat_active_file(path) {
            Ok(file) => Some(file),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "not an active file");
                None
            }
        }
    }
}

fn stat_active_file(path: &Path) -> Result<ActiveFile, HostError> {
    let io_err = |source: std::io::Error| HostError::Io {
        path: path.to_path_buf(),
        source,
    };
    let meta = fs::metadata(path).map_err(io_err)?;
    if !meta.is_file() {
        return Err(io_err(std::io::Error::new(
            ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }

    // Not every platform/file system records a birth time.
    let created = meta
        .created()
        .or_else(|e| {
            debug!(path = %path.display(), error = %e, "no birth time, using mtime");
            meta.modified()
        })
        .map_err(io_err)?;

    Ok(ActiveFile::new(path, epoch_millis(created)))
}

fn epoch_millis(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => i64::try_from(d.as_millis()).unwrap_or(i64::MAX),
        Err(e) => i64::try_from(e.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
    }
}

/// Renames with `std::fs::rename`, refusing to clobber an existing file.
pub(crate) struct FsFileManager;

impl FileManager for FsFileManager {
    fn rename(&self, file: &ActiveFile, new_path: &Path) -> Result<(), HostError> {
        if new_path != file.path() && new_path.exists() {
            return Err(HostError::TargetExists(new_path.to_path_buf()));
        }
        fs::rename(file.path(), new_path).map_err(|source| HostError::Io {
            path: file.path.clone(),
            source,
        })
    }
}

/// Settings persisted as a single JSON object on disk.
pub(crate) struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> HostError {
        HostError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Option<Value>, HostError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_err(e)),
        };
        if content.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| HostError::Json {
                path: self.path.clone(),
                source,
            })
    }

    fn save(&self, data: &Value) -> Result<(), HostError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }
        let json = serde_json::to_string_pretty(data).map_err(|source| HostError::Json {
            path: self.path.clone(),
            source,
        })?;

        // Write-then-rename so a crash never leaves a truncated data file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, format!("{json}\n")).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))
    }
}
