//! Ordered category collection and its completeness queries.

use super::{Category, CategoryId, CategoryOption, StateError};

/// Returns true iff no option of `category` is still `Waiting`.
pub fn category_complete(category: &Category) -> bool {
    category.is_complete()
}

/// Returns true iff every category is complete. Vacuously true when empty.
pub fn all_categories_complete(categories: &[Category]) -> bool {
    categories.iter().all(category_complete)
}

/// Owns the ordered list of categories for one game session.
///
/// Insertion order defines traversal order. Categories are addressed by the
/// [`CategoryId`] assigned on insertion, never by title.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryStore {
    categories: Vec<Category>,

    /// Sequential id allocator. Never reused.
    next_category_id: u32,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            next_category_id: 0,
        }
    }

    /// Builds a store from an ordered list of categories.
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut store = Self::new();
        for category in categories {
            store.add_category(category);
        }
        store
    }

    /// Appends a category and returns it with its freshly assigned id.
    pub fn add_category(&mut self, mut category: Category) -> &Category {
        category.assign_id(self.allocate_category_id());
        self.categories.push(category);
        &self.categories[self.categories.len() - 1]
    }

    /// Removes the category with the given id. No-op if absent.
    pub fn remove_category(&mut self, id: CategoryId) {
        match self.position(id) {
            Some(index) => {
                self.categories.remove(index);
            }
            None => tracing::warn!(category = %id, "remove_category: category not found"),
        }
    }

    /// Appends `option` to the category with the given id. No-op if absent.
    pub fn add_option_to_category(&mut self, id: CategoryId, option: CategoryOption) {
        match self.get_mut(id) {
            Some(category) => category.push_option(option),
            None => tracing::warn!(
                category = %id,
                "add_option_to_category: category not found"
            ),
        }
    }

    /// Removes the option at `index`. A category is never left without
    /// options: removing the last one leaves a single blank `Waiting` option.
    /// Unknown ids and out-of-range indices are no-ops.
    pub fn remove_option_from_category(&mut self, id: CategoryId, index: usize) {
        let Some(category) = self.get_mut(id) else {
            tracing::warn!(category = %id, "remove_option_from_category: category not found");
            return;
        };
        if !category.remove_option(index) {
            tracing::warn!(
                category = %id,
                index,
                len = category.options().len(),
                "remove_option_from_category: index out of range"
            );
        }
    }

    /// Replaces a category's options with fresh `Waiting` options.
    ///
    /// An empty title list is rejected and the existing options are kept.
    pub fn replace_options<I, S>(&mut self, id: CategoryId, titles: I) -> Result<(), StateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<_> = titles.into_iter().map(CategoryOption::new).collect();
        let category = self
            .get_mut(id)
            .ok_or(StateError::CategoryNotFound { id })?;
        if options.is_empty() {
            return Err(StateError::EmptyOptions { id });
        }
        category.replace_options(options);
        Ok(())
    }

    /// Discards the current categories and installs `categories` in order.
    pub fn replace_all(&mut self, categories: impl IntoIterator<Item = Category>) {
        self.categories.clear();
        for category in categories {
            self.add_category(category);
        }
    }

    /// Removes every category.
    pub fn clear(&mut self) {
        self.categories.clear();
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id() == id)
    }

    /// Index of the category with the given id in traversal order.
    pub fn position(&self, id: CategoryId) -> Option<usize> {
        self.categories.iter().position(|category| category.id() == id)
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.categories
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns true when every category is complete.
    pub fn is_complete(&self) -> bool {
        all_categories_complete(&self.categories)
    }

    pub(crate) fn categories_mut(&mut self) -> &mut [Category] {
        &mut self.categories
    }

    fn get_mut(&mut self, id: CategoryId) -> Option<&mut Category> {
        self.categories.iter_mut().find(|category| category.id() == id)
    }

    fn allocate_category_id(&mut self) -> CategoryId {
        let id = CategoryId(self.next_category_id);
        self.next_category_id += 1;
        id
    }
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a CategoryStore {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}
