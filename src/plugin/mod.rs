//! Plugin context
//!
//! Owns the settings value and the host capabilities, registers the two
//! commands, and runs them. Settings are loaded once with
//! [`Plugin::load`] and written back on every change.

pub(crate) mod panel;
pub(crate) mod settings;

use tracing::{debug, info};

use crate::core::{Feature, Notice, append_creation_time_to_file_name, copy_creation_time};
use crate::error::AppError;
use crate::host::Host;
use crate::utils::Timezone;

pub(crate) use panel::{FieldKind, PanelRow, panel_rows};
pub(crate) use settings::Settings;

/// Commands the plugin registers with the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PluginCommand {
    CopyCreationTime,
    AppendCreationTime,
}

impl PluginCommand {
    pub(crate) const ALL: [PluginCommand; 2] =
        [PluginCommand::CopyCreationTime, PluginCommand::AppendCreationTime];

    /// Stable identifier used to invoke the command
    pub(crate) fn id(self) -> &'static str {
        match self {
            PluginCommand::CopyCreationTime => "copy-creation-time-to-clipboard",
            PluginCommand::AppendCreationTime => "append-creation-time-to-file-name",
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            PluginCommand::CopyCreationTime => "Copy creation time to clipboard",
            PluginCommand::AppendCreationTime => "Append creation time to file name",
        }
    }

    pub(crate) fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

pub(crate) struct Plugin<'a> {
    host: Host<'a>,
    settings: Settings,
    timezone: Timezone,
}

impl<'a> Plugin<'a> {
    /// Load persisted settings (merged over defaults) and wire up the host.
    pub(crate) fn load(host: Host<'a>, timezone: Timezone) -> Result<Self, AppError> {
        let persisted = host.store.load().map_err(AppError::SettingsRead)?;
        let settings = Settings::merge_persisted(persisted)?;
        debug!(?settings, "settings loaded");
        Ok(Self::with_settings(host, settings, timezone))
    }

    pub(crate) fn with_settings(host: Host<'a>, settings: Settings, timezone: Timezone) -> Self {
        Self {
            host,
            settings,
            timezone,
        }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) fn save_settings(&self) -> Result<(), AppError> {
        persist(self.host, &self.settings)
    }

    /// Panel on-change handler: parse, persist, then apply.
    ///
    /// A value that fails to parse or to save leaves the current settings untouched.
    pub(crate) fn update_setting(&mut self, key: &str, raw: &str) -> Result<(), AppError> {
        let mut next = self.settings.clone();
        next.set(key, raw)?;
        persist(self.host, &next)?;
        info!(key, value = raw, "setting updated");
        self.settings = next;
        Ok(())
    }

    pub(crate) fn reset_settings(&mut self) -> Result<(), AppError> {
        self.settings = Settings::default();
        self.save_settings()
    }

    /// Invoke a registered command by id.
    pub(crate) fn run_command(&self, id: &str) -> Result<Notice, AppError> {
        let command = PluginCommand::from_id(id).ok_or_else(|| AppError::UnknownCommand {
            id: id.to_string(),
        })?;
        Ok(self.run(command))
    }

    /// Run a command and surface its outcome through the host notifier.
    pub(crate) fn run(&self, command: PluginCommand) -> Notice {
        debug!(command = command.id(), "running command");
        let notice = match command {
            PluginCommand::CopyCreationTime => self.copy_creation_time(),
            PluginCommand::AppendCreationTime => self.append_creation_time(),
        };
        self.host.notifier.notify(&notice);
        notice
    }

    fn copy_creation_time(&self) -> Notice {
        if !self.settings.copy_to_clipboard_enabled {
            return Notice::FeatureDisabled(Feature::CopyToClipboard);
        }
        let file = self.host.workspace.active_file();
        copy_creation_time(
            file.as_ref(),
            &self.settings.copy_time_format,
            self.timezone,
            self.host.clipboard,
        )
    }

    fn append_creation_time(&self) -> Notice {
        let file = self.host.workspace.active_file();
        append_creation_time_to_file_name(
            file.as_ref(),
            &self.settings.append_time_format,
            self.settings.append_to_file_name_enabled,
            self.timezone,
            self.host.files,
        )
    }
}

fn persist(host: Host<'_>, settings: &Settings) -> Result<(), AppError> {
    let value = settings.to_value()?;
    host.store.save(&value).map_err(AppError::SettingsWrite)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::core::ActiveFile;
    use crate::host::fake::FakeHost;

    const UTC: Timezone = Timezone::Named(chrono_tz::UTC);
    // 2023-05-06T09:30:00Z
    const MAY_SIXTH: i64 = 1_683_365_400_000;

    fn note() -> ActiveFile {
        ActiveFile::new("vault/note.md", MAY_SIXTH)
    }

    #[test]
    fn command_ids_and_names() {
        assert_eq!(
            PluginCommand::from_id("copy-creation-time-to-clipboard"),
            Some(PluginCommand::CopyCreationTime)
        );
        assert_eq!(
            PluginCommand::from_id("append-creation-time-to-file-name"),
            Some(PluginCommand::AppendCreationTime)
        );
        assert_eq!(PluginCommand::from_id("copy"), None);
        assert_eq!(
            PluginCommand::AppendCreationTime.name(),
            "Append creation time to file name"
        );
    }

    #[test]
    fn copy_end_to_end_with_legacy_settings() {
        let fake = FakeHost::with_file(note());
        fake.stored.replace(Some(json!({
            "creationTimeFormat": "YYYY-MM-DD",
            "copyToClipboardEnabled": true
        })));

        let plugin = Plugin::load(fake.host(), UTC).unwrap();
        let notice = plugin
            .run_command("copy-creation-time-to-clipboard")
            .unwrap();

        assert_eq!(*fake.clipboard.borrow(), vec!["2023-05-06".to_string()]);
        assert_eq!(
            notice,
            Notice::Copied {
                text: "2023-05-06".to_string()
            }
        );
        assert_eq!(fake.last_notice(), Some(notice));
    }

    #[test]
    fn copy_disabled_by_setting() {
        let fake = FakeHost::with_file(note());
        fake.stored
            .replace(Some(json!({ "copyToClipboardEnabled": false })));

        let plugin = Plugin::load(fake.host(), UTC).unwrap();
        let notice = plugin.run(PluginCommand::CopyCreationTime);

        assert_eq!(notice, Notice::FeatureDisabled(Feature::CopyToClipboard));
        assert!(fake.clipboard.borrow().is_empty());
    }

    #[test]
    fn append_disabled_by_default() {
        let fake = FakeHost::with_file(note());
        let plugin = Plugin::load(fake.host(), UTC).unwrap();

        let notice = plugin.run(PluginCommand::AppendCreationTime);

        assert_eq!(notice, Notice::FeatureDisabled(Feature::AppendToFileName));
        assert!(fake.renames.borrow().is_empty());
        assert_eq!(fake.last_notice(), Some(notice));
    }

    #[test]
    fn append_after_enabling_in_panel() {
        let fake = FakeHost::with_file(note());
        let mut plugin = Plugin::load(fake.host(), UTC).unwrap();
        plugin
            .update_setting("appendToFileNameEnabled", "true")
            .unwrap();

        let notice = plugin.run(PluginCommand::AppendCreationTime);

        assert_eq!(
            notice,
            Notice::Renamed {
                new_name: "note202305060930.md".to_string()
            }
        );
        assert_eq!(fake.renames.borrow().len(), 1);
    }

    #[test]
    fn no_active_file_for_either_command() {
        let fake = FakeHost::default();
        let mut settings = Settings::default();
        settings.append_to_file_name_enabled = true;
        let plugin = Plugin::with_settings(fake.host(), settings, UTC);

        for command in PluginCommand::ALL {
            assert_eq!(plugin.run(command), Notice::NoActiveFile);
        }
        assert!(fake.clipboard.borrow().is_empty());
        assert!(fake.renames.borrow().is_empty());
        assert_eq!(fake.notices.borrow().len(), 2);
    }

    #[test]
    fn active_file_resolved_on_every_invocation() {
        let fake = FakeHost::default();
        let plugin = Plugin::load(fake.host(), UTC).unwrap();

        assert_eq!(plugin.run(PluginCommand::CopyCreationTime), Notice::NoActiveFile);
        fake.active.replace(Some(note()));
        assert!(matches!(
            plugin.run(PluginCommand::CopyCreationTime),
            Notice::Copied { .. }
        ));
        assert_eq!(fake.active_lookups.get(), 2);
    }

    #[test]
    fn rename_failure_leaves_plugin_usable() {
        let fake = FakeHost::with_file(note());
        let mut settings = Settings::default();
        settings.append_to_file_name_enabled = true;
        let plugin = Plugin::with_settings(fake.host(), settings, UTC);

        fake.fail_rename.set(true);
        assert_eq!(plugin.run(PluginCommand::AppendCreationTime), Notice::RenameFailed);

        fake.fail_rename.set(false);
        assert!(matches!(
            plugin.run(PluginCommand::AppendCreationTime),
            Notice::Renamed { .. }
        ));
        assert!(matches!(
            plugin.run(PluginCommand::CopyCreationTime),
            Notice::Copied { .. }
        ));
    }

    #[test]
    fn unknown_command_is_error() {
        let fake = FakeHost::default();
        let plugin = Plugin::load(fake.host(), UTC).unwrap();
        let err = plugin.run_command("delete-everything").unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: delete-everything");
        assert!(fake.notices.borrow().is_empty());
    }

    #[test]
    fn update_setting_persists_immediately() {
        let fake = FakeHost::default();
        let mut plugin = Plugin::load(fake.host(), UTC).unwrap();

        plugin.update_setting("copyTimeFormat", "YYYY").unwrap();

        assert_eq!(fake.saves.get(), 1);
        let stored = fake.stored.borrow().clone().unwrap();
        assert_eq!(stored["copyTimeFormat"], "YYYY");
        assert_eq!(stored["timeoutSeconds"], 10);
        assert_eq!(plugin.settings().copy_time_format, "YYYY");
    }

    #[test]
    fn rejected_update_is_not_persisted() {
        let fake = FakeHost::default();
        let mut plugin = Plugin::load(fake.host(), UTC).unwrap();

        assert!(plugin.update_setting("timeoutSeconds", "soon").is_err());
        assert_eq!(fake.saves.get(), 0);
        assert_eq!(plugin.settings(), &Settings::default());
    }

    #[test]
    fn failed_save_keeps_previous_settings() {
        let fake = FakeHost::default();
        let mut plugin = Plugin::load(fake.host(), UTC).unwrap();
        fake.fail_save.set(true);

        let err = plugin.update_setting("copyTimeFormat", "YYYY").unwrap_err();
        assert!(matches!(err, AppError::SettingsWrite(_)));
        assert_eq!(plugin.settings().copy_time_format, "YYYYMMDDHHmm");
    }

    #[test]
    fn reset_restores_and_persists_defaults() {
        let fake = FakeHost::default();
        fake.stored
            .replace(Some(json!({ "appendToFileNameEnabled": true })));
        let mut plugin = Plugin::load(fake.host(), UTC).unwrap();
        assert!(plugin.settings().append_to_file_name_enabled);

        plugin.reset_settings().unwrap();

        assert_eq!(plugin.settings(), &Settings::default());
        let stored = fake.stored.borrow().clone().unwrap();
        assert_eq!(stored["appendToFileNameEnabled"], false);
    }

    #[test]
    fn malformed_store_fails_load() {
        let fake = FakeHost::default();
        fake.stored.replace(Some(json!("not an object")));
        let err = Plugin::load(fake.host(), UTC).err().unwrap();
        assert!(matches!(err, AppError::SettingsMalformed(_)));
    }

    #[test]
    fn save_settings_writes_full_record() {
        let fake = FakeHost::default();
        let plugin = Plugin::load(fake.host(), UTC).unwrap();
        plugin.save_settings().unwrap();
        let stored = fake.stored.borrow().clone().unwrap();
        assert_eq!(stored.as_object().unwrap().len(), 6);
    }
}
