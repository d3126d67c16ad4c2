//! Outcomes reported by [`ProgressionEngine::advance`](super::ProgressionEngine::advance).

use crate::state::Pointer;

/// Result of a single tap.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StepOutcome {
    /// The pointer moved; nothing was eliminated.
    Step,
    /// The option under the pointer was eliminated.
    Strike,
    /// Every category is resolved.
    Finished,
}

/// Detailed account of a single tap, for frontends that narrate the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    pub outcome: StepOutcome,

    /// Pointer after the tap; `None` once finished.
    pub pointer: Option<Pointer>,

    /// Cell discarded by this tap (strikes only).
    pub discarded: Option<Pointer>,

    /// Cell auto-resolved as its category's winner by this tap.
    pub chosen: Option<Pointer>,
}

impl StepReport {
    pub(crate) fn finished() -> Self {
        Self {
            outcome: StepOutcome::Finished,
            pointer: None,
            discarded: None,
            chosen: None,
        }
    }

    pub(crate) fn step(pointer: Pointer) -> Self {
        Self {
            outcome: StepOutcome::Step,
            pointer: Some(pointer),
            discarded: None,
            chosen: None,
        }
    }

    pub(crate) fn strike(pointer: Pointer, chosen_col: Option<usize>) -> Self {
        Self {
            outcome: StepOutcome::Strike,
            pointer: Some(pointer),
            discarded: Some(pointer),
            chosen: chosen_col.map(|col| Pointer::new(pointer.row, col)),
        }
    }
}
