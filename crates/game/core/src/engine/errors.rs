//! Error types for the progression engine.

use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::Pointer;

/// Errors surfaced while driving the progression engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    /// The grid reported unresolved categories but a full orbit from the
    /// pointer found no `Waiting` option. The grid is corrupted.
    #[error("no waiting option found after scanning {scanned} cells from {from}")]
    NoWaitingOption {
        from: Pointer,
        scanned: usize,
        context: ErrorContext,
    },

    /// Mash numbers must be positive.
    #[error("mash number must be positive (got {0})")]
    InvalidMashNumber(u32),
}

impl EngineError {
    pub(crate) fn no_waiting_option(from: Pointer, scanned: usize) -> Self {
        Self::NoWaitingOption {
            from,
            scanned,
            context: ErrorContext::new()
                .with_pointer(from)
                .with_message("completeness check and grid disagree"),
        }
    }
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::NoWaitingOption { .. } => ErrorSeverity::Fatal,
            EngineError::InvalidMashNumber(_) => ErrorSeverity::Validation,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            EngineError::NoWaitingOption { context, .. } => Some(context),
            EngineError::InvalidMashNumber(_) => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EngineError::NoWaitingOption { .. } => "ENGINE_NO_WAITING_OPTION",
            EngineError::InvalidMashNumber(_) => "ENGINE_INVALID_MASH_NUMBER",
        }
    }
}
