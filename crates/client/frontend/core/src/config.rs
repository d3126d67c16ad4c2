//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig) -> Self {
        Self { messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MASH_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `MASH_MESSAGE_LIMIT` - Messages shown per frame (default: 5)
    /// - `SHOW_STEP_MESSAGES` - Narrate plain pointer moves (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("MASH_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(limit) = read_env::<usize>("MASH_MESSAGE_LIMIT") {
            config.messages.frame_limit = limit;
        }
        if let Some(show) = read_env_bool("SHOW_STEP_MESSAGES") {
            config.messages.show_steps = show;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    /// Number of recent messages included in each [`UiFrame`](crate::UiFrame).
    pub frame_limit: usize,
    /// Strikes and wins are always narrated; plain moves only when set.
    pub show_steps: bool,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            frame_limit: 5,
            show_steps: false,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
