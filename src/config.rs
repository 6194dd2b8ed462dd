use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::consts::{APP_DIR, DATA_FILE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Optional `config.toml` with defaults for the global CLI options
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    /// Where settings are persisted (defaults to `<config dir>/copymeta/data.json`)
    #[serde(default)]
    pub(crate) data_file: Option<PathBuf>,
    /// Clipboard program plus arguments, e.g. "wl-copy" or "xclip -selection clipboard"
    #[serde(default)]
    pub(crate) clipboard_command: Option<String>,

    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
    #[serde(skip)]
    pub(crate) warnings: Vec<String>,
}

impl Config {
    /// Load the first config file that exists. Parse problems are kept
    /// and logged by [`Config::report`] once logging is up.
    pub(crate) fn load() -> Self {
        let mut warnings = Vec::new();

        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            let parsed = fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|content| Self::parse(&content));
            match parsed {
                Ok(mut config) => {
                    config.source = Some(path);
                    config.warnings = warnings;
                    return config;
                }
                Err(e) => warnings.push(format!("Failed to parse {}: {}", path.display(), e)),
            }
        }

        Self {
            warnings,
            ..Self::default()
        }
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str::<Config>(content).map_err(|e| e.to_string())
    }

    pub(crate) fn report(&self) {
        for warning in &self.warnings {
            warn!("{warning}");
        }
        if let Some(path) = &self.source {
            debug!(path = %path.display(), "loaded config");
        }
    }

    /// Default location of the settings data file
    pub(crate) fn default_data_file() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            return config_dir.join(APP_DIR).join(DATA_FILE);
        }
        if let Some(home) = dirs::home_dir() {
            return home.join(format!(".{APP_DIR}")).join(DATA_FILE);
        }
        PathBuf::from(DATA_FILE)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/copymeta/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_DIR).join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/copymeta/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_DIR).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.copymeta.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_DIR}.toml")));
        }

        paths
    }
}
