//! Category set loader.

use std::path::Path;

use crate::loaders::{LoadResult, parse_presets, read_file};
use crate::presets::PresetCatalog;

/// Loader for category sets from RON files.
///
/// File format: `{ "Set name": [ (title: "...", options: ["...", ...]), ... ] }`
///
/// Example:
/// ```ron
/// {
///     "Pets": [
///         (title: "Pet", options: ["Cat", "Dog", "Fish"]),
///         (title: "Name", options: ["Rex", "Tom"]),
///     ],
/// }
/// ```
pub struct PresetLoader;

impl PresetLoader {
    pub fn load(path: &Path) -> LoadResult<PresetCatalog> {
        let content = read_file(path)?;
        parse_presets(&content, &path.display().to_string())
    }
}
