//! Seams for external category providers.
//!
//! The engine only ever sees a finished category list. Anything that produces
//! one (built-in presets, files, a theme service) implements
//! [`CategorySource`]; anything that suggests options for an existing
//! category implements [`OptionSource`].

use std::collections::HashMap;

use mash_core::{Category, CategoryId, CategoryStore, GameConfig};

use crate::loaders::LoadResult;

/// Produces a complete, ordered category list.
pub trait CategorySource {
    fn categories(&self) -> LoadResult<Vec<Category>>;
}

/// Suggests option titles for a category, given its title.
pub trait OptionSource {
    fn options_for(&self, category_title: &str) -> LoadResult<Vec<String>>;
}

/// Turns a list of category titles into categories of blank options.
///
/// This is the shape theme-based suggestions arrive in: names only, with the
/// options left for the player to fill.
#[derive(Clone, Debug)]
pub struct TitleListSource {
    titles: Vec<String>,
    blank_options: usize,
}

impl TitleListSource {
    pub fn new<I, S>(titles: I, config: &GameConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            blank_options: config.blank_options,
        }
    }
}

impl CategorySource for TitleListSource {
    fn categories(&self) -> LoadResult<Vec<Category>> {
        Ok(self
            .titles
            .iter()
            .map(|title| Category::with_blank_options(title.clone(), self.blank_options))
            .collect())
    }
}

impl OptionSource for HashMap<String, Vec<String>> {
    fn options_for(&self, category_title: &str) -> LoadResult<Vec<String>> {
        self.get(category_title)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no options known for category '{category_title}'"))
    }
}

/// Replaces the store's categories with the source's list.
///
/// On failure the store is left untouched.
pub fn populate(store: &mut CategoryStore, source: &dyn CategorySource) -> LoadResult<()> {
    let categories = source.categories()?;
    tracing::info!(count = categories.len(), "categories loaded");
    store.replace_all(categories);
    Ok(())
}

/// Replaces one category's options with suggestions from `source`.
///
/// When the source fails or returns nothing, the category keeps the options
/// it had before the call.
pub fn fill_options(
    store: &mut CategoryStore,
    id: CategoryId,
    source: &dyn OptionSource,
) -> LoadResult<()> {
    let title = store
        .get(id)
        .map(|category| category.title().to_owned())
        .ok_or_else(|| anyhow::anyhow!("category {id} not found"))?;

    let options = source.options_for(&title)?;
    store.replace_options(id, options)?;
    tracing::info!(category = %id, %title, "options replaced");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_list_yields_blank_categories() {
        let source = TitleListSource::new(["Pet", "Car"], &GameConfig::default());
        let categories = source.categories().unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].title(), "Car");
        assert_eq!(
            categories[0].options().len(),
            GameConfig::DEFAULT_BLANK_OPTIONS
        );
        assert!(categories[0].options().iter().all(|o| o.title().is_empty()));
    }

    #[test]
    fn populate_replaces_existing_categories() {
        let mut store = CategoryStore::from_categories([Category::from_titles("Old", ["x"])]);
        let source = TitleListSource::new(["Pet"], &GameConfig::default());

        populate(&mut store, &source).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.as_slice()[0].title(), "Pet");
    }

    #[test]
    fn fill_options_keeps_previous_options_on_failure() {
        let mut store = CategoryStore::from_categories([Category::from_titles("Pet", ["Cat"])]);
        let id = store.as_slice()[0].id();
        let mut suggestions = HashMap::new();
        suggestions.insert("Pet".to_owned(), Vec::new());

        assert!(fill_options(&mut store, id, &suggestions).is_err());
        assert_eq!(store.get(id).unwrap().options()[0].title(), "Cat");

        suggestions.insert("Pet".to_owned(), vec!["Dog".into(), "Fish".into()]);
        fill_options(&mut store, id, &suggestions).unwrap();

        let titles: Vec<_> = store
            .get(id)
            .unwrap()
            .options()
            .iter()
            .map(|o| o.title().to_owned())
            .collect();
        assert_eq!(titles, vec!["Dog", "Fish"]);
    }

    #[test]
    fn fill_options_for_unknown_category_fails() {
        let mut store = CategoryStore::new();
        let suggestions: HashMap<String, Vec<String>> = HashMap::new();
        assert!(fill_options(&mut store, CategoryId(3), &suggestions).is_err());
    }
}
