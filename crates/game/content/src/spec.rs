//! Serializable category definitions used by data files.

use mash_core::Category;
use serde::{Deserialize, Serialize};

/// A category as written in content files: a title and plain option titles.
///
/// ```ron
/// (title: "Job", options: ["Doctor", "Artist", "Spy"])
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub title: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl CategorySpec {
    /// Converts into a playable category. All options start `Waiting`; an
    /// empty option list becomes a single blank option.
    pub fn into_category(self) -> Category {
        Category::from_titles(self.title, self.options)
    }
}

impl From<CategorySpec> for Category {
    fn from(spec: CategorySpec) -> Self {
        spec.into_category()
    }
}
