/// Resolution state of a single option.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OptionState {
    /// Still in play; the pointer may land on it.
    #[default]
    Waiting,
    /// Winner of its category.
    Chosen,
    /// Eliminated by a strike.
    Discarded,
}

impl OptionState {
    #[inline]
    pub const fn is_waiting(self) -> bool {
        matches!(self, Self::Waiting)
    }

    #[inline]
    pub const fn is_discarded(self) -> bool {
        matches!(self, Self::Discarded)
    }
}

/// One candidate answer inside a category.
///
/// The title is fixed at creation. The state is only changed by the
/// progression engine (and by reset).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryOption {
    title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    state: OptionState,
}

impl CategoryOption {
    /// Creates a new option in the `Waiting` state.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            state: OptionState::Waiting,
        }
    }

    /// Blank placeholder used to keep a category's option list non-empty.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Creates an option with an explicit state (snapshots, fixtures).
    pub fn with_state(title: impl Into<String>, state: OptionState) -> Self {
        Self {
            title: title.into(),
            state,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> OptionState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: OptionState) {
        self.state = state;
    }
}
