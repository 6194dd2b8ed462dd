//! Settings panel layout
//!
//! Describes each setting the way the host renders it: a display name, a
//! short description, and the kind of control bound to the field.

use super::settings::{
    APPEND_TIME_FORMAT, APPEND_TO_FILE_NAME_ENABLED, COPY_TIME_FORMAT, COPY_TO_CLIPBOARD_ENABLED,
    Settings, TIMEOUT_SECONDS, USE_KEYUP_EVENTS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Text,
    Toggle,
    Number,
}

impl FieldKind {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Toggle => "toggle",
            FieldKind::Number => "number",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingField {
    pub(crate) key: &'static str,
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) kind: FieldKind,
    /// Persisted for compatibility but not shown in the panel
    pub(crate) hidden: bool,
}

pub(crate) const FIELDS: &[SettingField] = &[
    SettingField {
        key: COPY_TIME_FORMAT,
        name: "Copy format",
        description: "Creation time format for the clipboard (moment tokens, e.g. YYYY-MM-DDTHH:mm)",
        kind: FieldKind::Text,
        hidden: false,
    },
    SettingField {
        key: COPY_TO_CLIPBOARD_ENABLED,
        name: "Copy to clipboard",
        description: "Allow copying the creation time to the clipboard",
        kind: FieldKind::Toggle,
        hidden: false,
    },
    SettingField {
        key: APPEND_TIME_FORMAT,
        name: "Append format",
        description: "Creation time format appended to file names (moment tokens)",
        kind: FieldKind::Text,
        hidden: false,
    },
    SettingField {
        key: APPEND_TO_FILE_NAME_ENABLED,
        name: "Append to file name",
        description: "Append creation time to file name",
        kind: FieldKind::Toggle,
        hidden: false,
    },
    SettingField {
        key: USE_KEYUP_EVENTS,
        name: "Use keyup events",
        description: "No effect",
        kind: FieldKind::Toggle,
        hidden: true,
    },
    SettingField {
        key: TIMEOUT_SECONDS,
        name: "Timeout (seconds)",
        description: "No effect",
        kind: FieldKind::Number,
        hidden: true,
    },
];

/// One rendered row of the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PanelRow {
    pub(crate) key: &'static str,
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) kind: FieldKind,
    pub(crate) value: String,
}

/// Bind the panel fields to the current settings values.
pub(crate) fn panel_rows(settings: &Settings, include_hidden: bool) -> Vec<PanelRow> {
    FIELDS
        .iter()
        .filter(|f| include_hidden || !f.hidden)
        .map(|f| PanelRow {
            key: f.key,
            name: f.name,
            description: f.description,
            kind: f.kind,
            value: settings.get(f.key).unwrap_or_default(),
        })
        .collect()
}
