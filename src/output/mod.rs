mod commands;
mod format;
mod settings;

pub(crate) use commands::{commands_json, commands_table};
pub(crate) use settings::{settings_json, settings_table};
