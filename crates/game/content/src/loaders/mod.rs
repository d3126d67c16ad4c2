//! Content loaders for reading game data from files.
//!
//! Category sets are RON maps of preset name to category list; game
//! configuration is TOML.

pub mod config;
pub mod preset;

pub use config::ConfigLoader;
pub use preset::PresetLoader;

use std::path::Path;

use crate::presets::PresetCatalog;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Parses a preset catalog from RON text. `origin` names the text in errors.
pub(crate) fn parse_presets(content: &str, origin: &str) -> LoadResult<PresetCatalog> {
    ron::from_str(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse preset RON ({}): {}", origin, e))
}
