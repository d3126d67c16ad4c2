//! Common error infrastructure for mash-core.
//!
//! Domain-specific errors (`EngineError`, `StateError`) live next to the code
//! that raises them. This module holds the shared severity classification and
//! the [`GameError`] trait they all implement.

use crate::state::Pointer;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same call may succeed once the caller changes something
/// - **Validation**: invalid input, reject without retry
/// - **Internal**: unexpected state inconsistency that needs investigation
/// - **Fatal**: the category grid is corrupted and the session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Contextual information attached to errors for diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    /// Pointer position at the time of the error.
    pub pointer: Option<Pointer>,

    /// Optional static message providing additional context.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub message: Option<&'static str>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pointer: None,
            message: None,
        }
    }

    #[must_use]
    pub const fn with_pointer(mut self, pointer: Pointer) -> Self {
        self.pointer = Some(pointer);
        self
    }

    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

/// Common trait for all mash-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Keep `error_code` stable; frontends match on it
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the context information for this error, if available.
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
