//! Category store errors.
//!
//! The core store operations never fail: misses are no-ops. These errors cover
//! the bulk replacement paths used by external category sources.

use crate::error::{ErrorSeverity, GameError};
use crate::state::CategoryId;

/// Errors that occur while replacing store contents.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// No category with this id exists in the store.
    #[error("category {id} not found")]
    CategoryNotFound { id: CategoryId },

    /// A replacement option list was empty; the previous options were kept.
    #[error("category {id} cannot be given an empty option list")]
    EmptyOptions { id: CategoryId },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StateError::CategoryNotFound { .. } | StateError::EmptyOptions { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StateError::CategoryNotFound { .. } => "STATE_CATEGORY_NOT_FOUND",
            StateError::EmptyOptions { .. } => "STATE_EMPTY_OPTIONS",
        }
    }
}
