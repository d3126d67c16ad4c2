//! Authoritative game state representation.
//!
//! This module owns the category grid and the progression bookkeeping.
//! Frontends edit categories through [`CategoryStore`] before a game starts;
//! once mashing begins, option states and the pointer are mutated exclusively
//! through [`ProgressionEngine`](crate::engine::ProgressionEngine).
pub mod error;
pub mod store;
pub mod types;

pub use error::StateError;
pub use store::{CategoryStore, all_categories_complete, category_complete};
pub use types::{Category, CategoryId, CategoryOption, OptionState, Pointer, ProgressState};

/// One game session: the categories being played and the engine's progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Categories in traversal order.
    pub categories: CategoryStore,

    /// Pointer and tap counter. Read-only outside the engine.
    progress: ProgressState,
}

impl GameState {
    /// Creates a fresh session over the given categories.
    pub fn new(categories: CategoryStore) -> Self {
        Self {
            categories,
            progress: ProgressState::new(),
        }
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub(crate) fn progress_mut(&mut self) -> &mut ProgressState {
        &mut self.progress
    }

    /// Returns true when every category has been resolved.
    pub fn is_complete(&self) -> bool {
        self.categories.is_complete()
    }
}
