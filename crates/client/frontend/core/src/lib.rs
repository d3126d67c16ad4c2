//! Cross-frontend primitives for presenting a MASH game.
//!
//! Houses the message log, narration of engine reports and the view-model
//! snapshots that both the terminal client and future graphical clients reuse.
pub mod config;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use message::{MessageEntry, MessageLevel, MessageLog, narrate};
pub use view_model::{CategoryView, CounterDisplay, OptionView, UiFrame};
