//! CLI configuration assembled from environment variables and data files.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use mash_content::ConfigLoader;
use mash_core::GameConfig;
use mash_frontend_core::FrontendConfig;

/// Preset used when neither a categories file nor a preset name is given.
pub const DEFAULT_PRESET: &str = "Traditional";

/// Terminal client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub game: GameConfig,
    pub frontend: FrontendConfig,
    /// RON category catalog to read instead of the built-in one.
    pub categories_file: Option<PathBuf>,
    /// Directory for log files. Logs go to stderr when unset.
    pub log_dir: Option<PathBuf>,
    /// Mash until finished without waiting for key presses.
    pub auto: bool,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MASH_CONFIG` - TOML file with `mash_number`, `blank_options`, `preset`
    /// - `MASH_NUMBER` - Mash number, overrides the config file
    /// - `MASH_PRESET` - Category set name, overrides the config file
    /// - `MASH_CATEGORIES` - RON category catalog path
    /// - `MASH_LOG_DIR` - Write logs to `<dir>/mash.log` instead of stderr
    /// - `MASH_AUTO` - Play to the end without input (default: false)
    pub fn from_env() -> Result<Self> {
        let mut config = Self {
            frontend: FrontendConfig::from_env(),
            ..Self::default()
        };

        if let Some(path) = env::var_os("MASH_CONFIG") {
            config.game = ConfigLoader::load(&PathBuf::from(path))?;
        }
        if let Some(mash_number) = read_env::<u32>("MASH_NUMBER").filter(|n| *n > 0) {
            config.game = config.game.with_mash_number(mash_number);
        }
        if let Ok(preset) = env::var("MASH_PRESET") {
            config.game = config.game.with_preset(preset);
        }
        config.categories_file = env::var_os("MASH_CATEGORIES").map(PathBuf::from);
        config.log_dir = env::var_os("MASH_LOG_DIR").map(PathBuf::from);
        config.auto = read_env_bool("MASH_AUTO").unwrap_or(false);

        Ok(config)
    }

    pub fn preset_name(&self) -> &str {
        self.game.preset.as_deref().unwrap_or(DEFAULT_PRESET)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
