//! Persisted plugin settings
//!
//! The stored object is merged over the defaults on every load, so a
//! partial (or older) data file only overrides the keys it carries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::DEFAULT_TIME_FORMAT;
use crate::error::AppError;

pub(crate) const USE_KEYUP_EVENTS: &str = "useKeyupEvents";
pub(crate) const TIMEOUT_SECONDS: &str = "timeoutSeconds";
pub(crate) const COPY_TIME_FORMAT: &str = "copyTimeFormat";
pub(crate) const COPY_TO_CLIPBOARD_ENABLED: &str = "copyToClipboardEnabled";
pub(crate) const APPEND_TIME_FORMAT: &str = "appendTimeFormat";
pub(crate) const APPEND_TO_FILE_NAME_ENABLED: &str = "appendToFileNameEnabled";

pub(crate) const KEYS: &[&str] = &[
    USE_KEYUP_EVENTS,
    TIMEOUT_SECONDS,
    COPY_TIME_FORMAT,
    COPY_TO_CLIPBOARD_ENABLED,
    APPEND_TIME_FORMAT,
    APPEND_TO_FILE_NAME_ENABLED,
];

/// Keys written by earlier releases and the current keys they feed.
const LEGACY_KEYS: &[(&str, &[&str])] = &[
    ("timeout", &[TIMEOUT_SECONDS]),
    ("creationTimeFormat", &[COPY_TIME_FORMAT, APPEND_TIME_FORMAT]),
    ("copyCreationTimeToClipboard", &[COPY_TO_CLIPBOARD_ENABLED]),
    ("appendCreationTimeToFileName", &[APPEND_TO_FILE_NAME_ENABLED]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Settings {
    /// No effect; kept so existing data files stay valid
    pub(crate) use_keyup_events: bool,
    /// No effect; kept so existing data files stay valid
    pub(crate) timeout_seconds: u64,
    pub(crate) copy_time_format: String,
    pub(crate) copy_to_clipboard_enabled: bool,
    pub(crate) append_time_format: String,
    pub(crate) append_to_file_name_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_keyup_events: false,
            timeout_seconds: 10,
            copy_time_format: DEFAULT_TIME_FORMAT.to_string(),
            copy_to_clipboard_enabled: true,
            append_time_format: DEFAULT_TIME_FORMAT.to_string(),
            append_to_file_name_enabled: false,
        }
    }
}

impl Settings {
    /// Overlay a persisted object onto the defaults.
    ///
    /// `None` (first run) and `null` yield the defaults. Null members count
    /// as absent; unknown members are ignored.
    pub(crate) fn merge_persisted(persisted: Option<Value>) -> Result<Self, AppError> {
        let mut map = match persisted {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(AppError::SettingsMalformed(format!(
                    "expected a JSON object, found {}",
                    json_kind(&other)
                )));
            }
        };

        map.retain(|_, v| !v.is_null());
        migrate_legacy_keys(&mut map);

        serde_json::from_value(Value::Object(map))
            .map_err(|e| AppError::SettingsMalformed(e.to_string()))
    }

    pub(crate) fn to_value(&self) -> Result<Value, AppError> {
        serde_json::to_value(self).map_err(|e| AppError::SettingsMalformed(e.to_string()))
    }

    /// Resolve a user-typed key to its canonical spelling.
    pub(crate) fn canonical_key(key: &str) -> Option<&'static str> {
        KEYS.iter().copied().find(|k| k.eq_ignore_ascii_case(key.trim()))
    }

    /// Current value of `key` as display text
    pub(crate) fn get(&self, key: &str) -> Option<String> {
        let value = match Self::canonical_key(key)? {
            USE_KEYUP_EVENTS => self.use_keyup_events.to_string(),
            TIMEOUT_SECONDS => self.timeout_seconds.to_string(),
            COPY_TIME_FORMAT => self.copy_time_format.clone(),
            COPY_TO_CLIPBOARD_ENABLED => self.copy_to_clipboard_enabled.to_string(),
            APPEND_TIME_FORMAT => self.append_time_format.clone(),
            APPEND_TO_FILE_NAME_ENABLED => self.append_to_file_name_enabled.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Parse `raw` for the field named by `key` and store it.
    pub(crate) fn set(&mut self, key: &str, raw: &str) -> Result<(), AppError> {
        let invalid = |reason: &str| AppError::InvalidSetting {
            key: key.to_string(),
            reason: reason.to_string(),
        };
        let Some(canonical) = Self::canonical_key(key) else {
            return Err(invalid(&format!("unknown setting (expected one of {})", KEYS.join(", "))));
        };

        match canonical {
            USE_KEYUP_EVENTS => {
                self.use_keyup_events =
                    parse_bool(raw).ok_or_else(|| invalid("expected true or false"))?;
            }
            TIMEOUT_SECONDS => {
                self.timeout_seconds = raw
                    .trim()
                    .parse()
                    .map_err(|_| invalid("expected a non-negative integer"))?;
            }
            COPY_TIME_FORMAT => self.copy_time_format = raw.to_string(),
            COPY_TO_CLIPBOARD_ENABLED => {
                self.copy_to_clipboard_enabled =
                    parse_bool(raw).ok_or_else(|| invalid("expected true or false"))?;
            }
            APPEND_TIME_FORMAT => self.append_time_format = raw.to_string(),
            APPEND_TO_FILE_NAME_ENABLED => {
                self.append_to_file_name_enabled =
                    parse_bool(raw).ok_or_else(|| invalid("expected true or false"))?;
            }
            _ => return Err(invalid("unknown setting")),
        }
        Ok(())
    }
}

/// Rename keys written by earlier releases. A current key always wins.
fn migrate_legacy_keys(map: &mut Map<String, Value>) {
    for (legacy, targets) in LEGACY_KEYS {
        let Some(value) = map.remove(*legacy) else {
            continue;
        };
        for target in *targets {
            if !map.contains_key(*target) {
                map.insert((*target).to_string(), value.clone());
            }
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
