mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod host;
mod logging;
mod output;
mod plugin;
mod utils;

use clap::Parser;

use app::CommandContext;
use cli::Cli;
use config::Config;
use host::Host;
use host::clipboard::SystemClipboard;
use host::console::ConsoleNotifier;
use host::fs::{FsFileManager, FsWorkspace, JsonSettingsStore};
use utils::Timezone;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    logging::init(cli.debug);
    config.report();

    let timezone = match Timezone::parse(cli.timezone.as_deref()) {
        Ok(tz) => tz,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let use_color = cli.use_color();
    let workspace = FsWorkspace::new(cli.file.clone());
    let files = FsFileManager;
    let clipboard = SystemClipboard::new(cli.clipboard_command.as_deref());
    let notifier = ConsoleNotifier::new(cli.json, use_color);
    let store = JsonSettingsStore::new(cli.data_file());

    let ctx = CommandContext {
        host: Host {
            workspace: &workspace,
            files: &files,
            clipboard: &clipboard,
            notifier: &notifier,
            store: &store,
        },
        timezone,
        data_file: store.path(),
        json: cli.json,
        use_color,
    };

    match app::run(&cli.command, &ctx) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
