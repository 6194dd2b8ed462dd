use std::path::Path;

use serde_json::json;
use tracing::warn;

use crate::cli::{Commands, SettingsCommands};
use crate::error::AppError;
use crate::host::Host;
use crate::output::{commands_json, commands_table, settings_json, settings_table};
use crate::plugin::{Plugin, PluginCommand, Settings, panel_rows};
use crate::utils::{Timezone, format_creation_time, parse_timestamp};

pub(crate) struct CommandContext<'a> {
    pub(crate) host: Host<'a>,
    pub(crate) timezone: Timezone,
    pub(crate) data_file: &'a Path,
    pub(crate) json: bool,
    pub(crate) use_color: bool,
}

impl CommandContext<'_> {
    /// Load the plugin, falling back to defaults when the data file is unusable.
    ///
    /// Commands only read settings, so a broken data file is reported and
    /// left as is rather than overwritten.
    fn plugin_or_defaults(&self) -> Plugin<'_> {
        Plugin::load(self.host, self.timezone).unwrap_or_else(|e| {
            warn!(error = %e, "using default settings");
            Plugin::with_settings(self.host, Settings::default(), self.timezone)
        })
    }
}

/// Run a subcommand. `Ok(false)` means the command ran but reported a failure.
pub(crate) fn run(command: &Commands, ctx: &CommandContext<'_>) -> Result<bool, AppError> {
    match command {
        Commands::CopyCreationTime => handle_plugin_command(PluginCommand::CopyCreationTime, ctx),
        Commands::AppendCreationTime => {
            handle_plugin_command(PluginCommand::AppendCreationTime, ctx)
        }
        Commands::List => {
            handle_list(ctx);
            Ok(true)
        }
        Commands::Settings { command } => handle_settings(command.as_ref(), ctx),
        Commands::Format { timestamp, pattern } => {
            handle_format(timestamp, pattern.as_deref(), ctx)
        }
    }
}

fn handle_plugin_command(
    command: PluginCommand,
    ctx: &CommandContext<'_>,
) -> Result<bool, AppError> {
    let plugin = ctx.plugin_or_defaults();
    let notice = plugin.run_command(command.id())?;
    Ok(!notice.is_failure())
}

fn handle_list(ctx: &CommandContext<'_>) {
    if ctx.json {
        println!("{}", commands_json());
    } else {
        println!("{}", commands_table(ctx.use_color));
    }
}

fn handle_settings(
    command: Option<&SettingsCommands>,
    ctx: &CommandContext<'_>,
) -> Result<bool, AppError> {
    match command.unwrap_or(&SettingsCommands::Show { all: false }) {
        SettingsCommands::Show { all } => {
            let plugin = Plugin::load(ctx.host, ctx.timezone)?;
            let rows = panel_rows(plugin.settings(), *all);
            if ctx.json {
                println!("{}", settings_json(&rows));
            } else {
                println!("{}", settings_table(&rows, ctx.use_color));
            }
        }
        SettingsCommands::Set { key, value } => {
            let mut plugin = Plugin::load(ctx.host, ctx.timezone)?;
            plugin.update_setting(key, value)?;
            let key = Settings::canonical_key(key).unwrap_or(key.as_str());
            let saved = plugin.settings().get(key).unwrap_or_default();
            if ctx.json {
                println!("{}", json!({ "key": key, "value": saved }));
            } else {
                println!("Saved {key} = {saved}");
            }
        }
        SettingsCommands::Reset => {
            let mut plugin = Plugin::with_settings(ctx.host, Settings::default(), ctx.timezone);
            plugin.reset_settings()?;
            if ctx.json {
                println!("{}", json!({ "reset": true }));
            } else {
                println!("Settings reset to defaults");
            }
        }
        SettingsCommands::Path => println!("{}", ctx.data_file.display()),
    }
    Ok(true)
}

fn handle_format(
    timestamp: &str,
    pattern: Option<&str>,
    ctx: &CommandContext<'_>,
) -> Result<bool, AppError> {
    let timestamp_ms = parse_timestamp(timestamp)?;
    let settings_pattern;
    let pattern = match pattern {
        Some(p) => p,
        None => {
            settings_pattern = ctx.plugin_or_defaults().settings().copy_time_format.clone();
            settings_pattern.as_str()
        }
    };

    let text = format_creation_time(timestamp_ms, pattern, ctx.timezone)?;
    if ctx.json {
        println!(
            "{}",
            json!({ "timestamp": timestamp_ms, "pattern": pattern, "text": text })
        );
    } else {
        println!("{text}");
    }
    Ok(true)
}
