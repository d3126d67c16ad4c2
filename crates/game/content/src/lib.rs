//! Data-driven content definitions and loaders.
//!
//! This crate houses the built-in category sets and provides loaders for
//! RON/TOML data files:
//! - Category sets (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//! - Pluggable category and option sources for external providers
//!
//! Content is converted into `mash-core` categories before play and never
//! appears in engine logic.

pub mod loaders;
pub mod presets;
pub mod source;
pub mod spec;

pub use loaders::{ConfigLoader, LoadResult, PresetLoader};
pub use presets::{PresetCatalog, PresetSource, builtin_catalog};
pub use source::{CategorySource, OptionSource, TitleListSource, fill_options, populate};
pub use spec::CategorySpec;
