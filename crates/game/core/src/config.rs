/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Mash number applied when a session starts. `None` leaves the engine
    /// unarmed until the player picks one.
    pub mash_number: Option<u32>,

    /// Number of blank options given to categories generated from a bare
    /// list of titles.
    pub blank_options: usize,

    /// Name of the built-in category set to start from.
    pub preset: Option<String>,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BLANK_OPTIONS: usize = 4;

    pub fn new() -> Self {
        Self {
            mash_number: None,
            blank_options: Self::DEFAULT_BLANK_OPTIONS,
            preset: None,
        }
    }

    #[must_use]
    pub fn with_mash_number(mut self, mash_number: u32) -> Self {
        self.mash_number = Some(mash_number);
        self
    }

    #[must_use]
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
