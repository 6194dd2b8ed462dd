//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Copy the file's creation time to the clipboard
    #[command(name = "copy-creation-time-to-clipboard", visible_alias = "copy")]
    CopyCreationTime,
    /// Append the file's creation time to its name
    #[command(name = "append-creation-time-to-file-name", visible_alias = "append")]
    AppendCreationTime,
    /// List the registered commands
    #[command(name = "commands")]
    List,
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommands>,
    },
    /// Format an epoch-millisecond timestamp
    Format {
        /// Milliseconds since the Unix epoch; a decimal part is truncated
        #[arg(allow_hyphen_values = true)]
        timestamp: String,
        /// Pattern to use instead of the copy format setting
        #[arg(short, long)]
        pattern: Option<String>,
    },
}

/// Settings panel subcommands
#[derive(Subcommand)]
pub(crate) enum SettingsCommands {
    /// Show the settings panel (default)
    Show {
        /// Include settings kept only for compatibility
        #[arg(long)]
        all: bool,
    },
    /// Change a setting and save it
    Set {
        key: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Restore and save the defaults
    Reset,
    /// Print the settings data file path
    Path,
}
