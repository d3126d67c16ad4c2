//! Deterministic MASH rules shared across clients.
//!
//! `mash-core` defines the category grid, the tap-driven elimination engine
//! and the errors they raise. Categories are edited through
//! [`state::CategoryStore`]; once mashing starts, every state change flows
//! through [`engine::ProgressionEngine`].
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

pub use config::GameConfig;
pub use engine::{EngineError, ProgressionEngine, StepOutcome, StepReport};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use state::{
    Category, CategoryId, CategoryOption, CategoryStore, GameState, OptionState, Pointer,
    ProgressState, StateError, all_categories_complete, category_complete,
};
