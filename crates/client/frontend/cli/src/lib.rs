//! Terminal frontend for the MASH game.
//!
//! Loads a category set, drives [`mash_core::ProgressionEngine`] from key
//! presses and redraws a plain-text grid after every tap. With `MASH_AUTO`
//! set it plays to the end and prints the winners instead.

mod app;
mod config;
mod input;
pub mod logging;
pub mod render;

pub use app::App;
pub use config::{CliConfig, DEFAULT_PRESET};
pub use input::{InputHandler, KeyAction};
