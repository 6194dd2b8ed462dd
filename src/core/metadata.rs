//! Creation-time formatting, clipboard copy, and file-name append

use std::path::{self, PathBuf};

use tracing::{debug, warn};

use crate::core::types::{ActiveFile, Feature, Notice};
use crate::host::{Clipboard, FileManager};
use crate::utils::{Timezone, format_creation_time};

/// Build `{basename}{timestamp}.{extension}`.
///
/// The timestamp is concatenated without a separator. A file without an
/// extension gets no trailing dot.
pub(crate) fn compose_appended_file_name(basename: &str, extension: &str, timestamp: &str) -> String {
    if extension.is_empty() {
        format!("{basename}{timestamp}")
    } else {
        format!("{basename}{timestamp}.{extension}")
    }
}

/// Path of `file` after renaming it to `new_name` in the same directory.
///
/// `None` when `new_name` is not a single file name, e.g. a time format
/// like `DD/MM/YYYY` that would otherwise move the file into a subfolder.
pub(crate) fn renamed_path(file: &ActiveFile, new_name: &str) -> Option<PathBuf> {
    let plain = !new_name.is_empty()
        && new_name != "."
        && new_name != ".."
        && !new_name.chars().any(path::is_separator);
    plain.then(|| file.path().with_file_name(new_name))
}

/// Format the active file's creation time and put it on the clipboard.
pub(crate) fn copy_creation_time(
    file: Option<&ActiveFile>,
    pattern: &str,
    timezone: Timezone,
    clipboard: &dyn Clipboard,
) -> Notice {
    let Some(file) = file else {
        return Notice::NoActiveFile;
    };

    let text = match format_creation_time(file.creation_timestamp, pattern, timezone) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %file.path().display(), error = %e, "cannot format creation time");
            return Notice::InvalidTimestamp;
        }
    };

    match clipboard.write_text(&text) {
        Ok(()) => {
            debug!(path = %file.path().display(), %text, "copied creation time");
            Notice::Copied { text }
        }
        Err(e) => {
            warn!(error = %e, "clipboard write failed");
            Notice::ClipboardFailed
        }
    }
}

/// Append the active file's formatted creation time to its name.
///
/// Every rename error is reported the same way; the cause is only logged.
pub(crate) fn append_creation_time_to_file_name(
    file: Option<&ActiveFile>,
    pattern: &str,
    enabled: bool,
    timezone: Timezone,
    files: &dyn FileManager,
) -> Notice {
    if !enabled {
        return Notice::FeatureDisabled(Feature::AppendToFileName);
    }
    let Some(file) = file else {
        return Notice::NoActiveFile;
    };

    let timestamp = match format_creation_time(file.creation_timestamp, pattern, timezone) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %file.path().display(), error = %e, "cannot format creation time");
            return Notice::InvalidTimestamp;
        }
    };

    let new_name = compose_appended_file_name(&file.basename, &file.extension, &timestamp);
    let Some(new_path) = renamed_path(file, &new_name) else {
        warn!(
            path = %file.path().display(),
            new_name = %new_name,
            "new name is not a plain file name"
        );
        return Notice::RenameFailed;
    };

    match files.rename(file, &new_path) {
        Ok(()) => {
            debug!(from = %file.path().display(), to = %new_path.display(), "renamed");
            Notice::Renamed { new_name }
        }
        Err(e) => {
            warn!(
                from = %file.path().display(),
                to = %new_path.display(),
                error = %e,
                "rename failed"
            );
            Notice::RenameFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::host::fake::FakeHost;

    const UTC: Timezone = Timezone::Named(chrono_tz::UTC);
    // 2024-01-01T12:00:00Z
    const NEW_YEAR_NOON: i64 = 1_704_110_400_000;

    fn note() -> ActiveFile {
        ActiveFile::new("vault/journal/note.md", NEW_YEAR_NOON)
    }

    #[test]
    fn compose_concatenates_without_separator() {
        assert_eq!(
            compose_appended_file_name("note", "md", "202401011200"),
            "note202401011200.md"
        );
    }

    #[test]
    fn compose_keeps_spaces_in_timestamp() {
        assert_eq!(
            compose_appended_file_name("note", "md", " 2024-01-01"),
            "note 2024-01-01.md"
        );
    }

    #[test]
    fn compose_without_extension_has_no_dot() {
        assert_eq!(compose_appended_file_name("README", "", "2024"), "README2024");
    }

    #[test]
    fn renamed_path_stays_in_parent() {
        let path = renamed_path(&note(), "note202401011200.md").unwrap();
        assert_eq!(path, Path::new("vault/journal/note202401011200.md"));

        let top = ActiveFile::new("note.md", 0);
        assert_eq!(renamed_path(&top, "x.md").unwrap(), Path::new("x.md"));
    }

    #[test]
    fn renamed_path_rejects_multi_component_names() {
        for name in ["note2024/01.md", "../note.md", "..", ".", ""] {
            assert_eq!(renamed_path(&note(), name), None, "{name}");
        }
    }

    #[test]
    fn copy_writes_formatted_time() {
        let fake = FakeHost::default();
        let file = note();
        let notice = copy_creation_time(Some(&file), "YYYY-MM-DD HH:mm", UTC, &fake);
        assert_eq!(
            notice,
            Notice::Copied {
                text: "2024-01-01 12:00".to_string()
            }
        );
        assert_eq!(*fake.clipboard.borrow(), vec!["2024-01-01 12:00".to_string()]);
    }

    #[test]
    fn copy_without_active_file_touches_nothing() {
        let fake = FakeHost::default();
        let notice = copy_creation_time(None, "YYYY", UTC, &fake);
        assert_eq!(notice, Notice::NoActiveFile);
        assert!(fake.clipboard.borrow().is_empty());
    }

    #[test]
    fn copy_reports_clipboard_failure() {
        let fake = FakeHost::default();
        fake.fail_clipboard.set(true);
        let file = note();
        let notice = copy_creation_time(Some(&file), "YYYY", UTC, &fake);
        assert_eq!(notice, Notice::ClipboardFailed);
    }

    #[test]
    fn copy_with_unrepresentable_timestamp() {
        let fake = FakeHost::default();
        let file = ActiveFile::new("note.md", i64::MAX);
        let notice = copy_creation_time(Some(&file), "YYYY", UTC, &fake);
        assert_eq!(notice, Notice::InvalidTimestamp);
        assert!(fake.clipboard.borrow().is_empty());
    }

    #[test]
    fn append_renames_within_directory() {
        let fake = FakeHost::default();
        let file = note();
        let notice = append_creation_time_to_file_name(Some(&file), "YYYYMMDDHHmm", true, UTC, &fake);
        assert_eq!(
            notice,
            Notice::Renamed {
                new_name: "note202401011200.md".to_string()
            }
        );
        assert_eq!(
            *fake.renames.borrow(),
            vec![(
                PathBuf::from("vault/journal/note.md"),
                PathBuf::from("vault/journal/note202401011200.md")
            )]
        );
    }

    #[test]
    fn append_disabled_never_renames() {
        let fake = FakeHost::default();
        let file = note();
        let notice = append_creation_time_to_file_name(Some(&file), "YYYY", false, UTC, &fake);
        assert_eq!(notice, Notice::FeatureDisabled(Feature::AppendToFileName));
        assert!(fake.renames.borrow().is_empty());
    }

    #[test]
    fn append_without_active_file() {
        let fake = FakeHost::default();
        let notice = append_creation_time_to_file_name(None, "YYYY", true, UTC, &fake);
        assert_eq!(notice, Notice::NoActiveFile);
        assert!(fake.renames.borrow().is_empty());
    }

    #[test]
    fn append_with_separator_in_pattern_never_renames() {
        let fake = FakeHost::default();
        let file = note();
        let notice = append_creation_time_to_file_name(Some(&file), "YYYY/MM", true, UTC, &fake);
        assert_eq!(notice, Notice::RenameFailed);
        assert!(fake.renames.borrow().is_empty());
    }

    #[test]
    fn append_rename_failure_is_generic_and_recoverable() {
        let fake = FakeHost::default();
        let file = note();
        fake.fail_rename.set(true);
        let notice = append_creation_time_to_file_name(Some(&file), "YYYY", true, UTC, &fake);
        assert_eq!(notice, Notice::RenameFailed);

        fake.fail_rename.set(false);
        let notice = append_creation_time_to_file_name(Some(&file), "YYYY", true, UTC, &fake);
        assert_eq!(
            notice,
            Notice::Renamed {
                new_name: "note2024.md".to_string()
            }
        );
    }
}
