//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "copymeta")]
#[command(
    about = "Copy a file's creation time to the clipboard or append it to the file name",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// File to act on (the active file)
    #[arg(short, long, global = true, env = "COPYMETA_FILE", value_name = "PATH")]
    pub(crate) file: Option<PathBuf>,

    /// Settings data file (default: <config dir>/copymeta/data.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) data_file: Option<PathBuf>,

    /// Timezone for formatting (e.g., "UTC", "Europe/Berlin"); local time by default
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Clipboard program and arguments (default: auto-detect)
    #[arg(long, global = true, value_name = "CMD")]
    pub(crate) clipboard_command: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // String options: only apply if CLI didn't set them
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.data_file.is_none() {
            self.data_file = config.data_file.clone();
        }
        if self.clipboard_command.is_none() {
            self.clipboard_command = config.clipboard_command.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color || self.json {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(Config::default_data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("copymeta").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn config_fills_unset_options() {
        let config = Config {
            debug: true,
            color: Some(ConfigColorMode::Never),
            timezone: Some("UTC".to_string()),
            data_file: Some(PathBuf::from("/tmp/data.json")),
            clipboard_command: Some("wl-copy".to_string()),
            ..Config::default()
        };
        let cli = parse(&["commands"]).with_config(&config);
        assert!(cli.debug);
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.data_file(), PathBuf::from("/tmp/data.json"));
        assert_eq!(cli.clipboard_command.as_deref(), Some("wl-copy"));
    }

    #[test]
    fn cli_wins_over_config() {
        let config = Config {
            timezone: Some("UTC".to_string()),
            color: Some(ConfigColorMode::Never),
            ..Config::default()
        };
        let cli = parse(&["commands", "--timezone", "Asia/Tokyo", "--color", "always"])
            .with_config(&config);
        assert_eq!(cli.timezone.as_deref(), Some("Asia/Tokyo"));
        assert_eq!(cli.color, ColorMode::Always);
    }

    #[test]
    fn json_disables_color() {
        let cli = parse(&["commands", "--color", "always", "--json"]);
        assert!(!cli.use_color());
    }
}
