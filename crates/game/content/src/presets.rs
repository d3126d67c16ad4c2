//! Built-in category sets.

use std::collections::BTreeMap;

use mash_core::Category;

use crate::loaders::{LoadResult, parse_presets};
use crate::source::CategorySource;
use crate::spec::CategorySpec;

const BUILTIN_PRESETS: &str = include_str!("../data/presets.ron");

/// Named category sets, keyed by display name.
pub type PresetCatalog = BTreeMap<String, Vec<CategorySpec>>;

/// Parses the catalog shipped with the crate.
pub fn builtin_catalog() -> LoadResult<PresetCatalog> {
    parse_presets(BUILTIN_PRESETS, "builtin presets")
}

/// Category source that serves one named set from a catalog.
///
/// Unknown names yield an empty collection and a warning rather than an
/// error, so a stale preset name never blocks a new game.
#[derive(Clone, Debug)]
pub struct PresetSource {
    catalog: PresetCatalog,
    name: String,
}

impl PresetSource {
    /// Selects `name` from the built-in catalog.
    pub fn builtin(name: impl Into<String>) -> LoadResult<Self> {
        Ok(Self::from_catalog(builtin_catalog()?, name))
    }

    pub fn from_catalog(catalog: PresetCatalog, name: impl Into<String>) -> Self {
        Self {
            catalog,
            name: name.into(),
        }
    }

    /// Names of every set in the catalog, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.catalog.keys().map(String::as_str)
    }
}

impl CategorySource for PresetSource {
    fn categories(&self) -> LoadResult<Vec<Category>> {
        match self.catalog.get(&self.name) {
            Some(specs) => Ok(specs.iter().cloned().map(CategorySpec::into_category).collect()),
            None => {
                tracing::warn!(preset = %self.name, "default category set not found");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mash_core::OptionState;

    #[test]
    fn builtin_catalog_has_both_sets() {
        let catalog = builtin_catalog().unwrap();
        let names: Vec<_> = catalog.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Software Engineer", "Traditional"]);
    }

    #[test]
    fn traditional_set_is_four_by_four() {
        let categories = PresetSource::builtin("Traditional")
            .unwrap()
            .categories()
            .unwrap();

        let titles: Vec<_> = categories.iter().map(Category::title).collect();
        assert_eq!(titles, vec!["Marry", "Kids", "Job", "Living Arrangement"]);
        for category in &categories {
            assert_eq!(category.options().len(), 4);
            assert!(
                category
                    .options()
                    .iter()
                    .all(|option| option.state() == OptionState::Waiting)
            );
        }
        assert_eq!(categories[2].options()[3].title(), "Spy");
    }

    #[test]
    fn unknown_preset_is_empty() {
        let source = PresetSource::builtin("Pirate").unwrap();
        assert!(source.categories().unwrap().is_empty());
    }
}
