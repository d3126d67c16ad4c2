use super::Pointer;

/// Pointer and counter bookkeeping owned by the progression engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressState {
    /// Current cell, `None` once every category has been resolved.
    pub(crate) pointer: Option<Pointer>,

    /// Taps required per elimination. `None` until configured; while unset
    /// the pointer moves but strikes never fire.
    pub(crate) mash_number: Option<u32>,

    /// Taps since the last elimination.
    pub(crate) current_count: u32,
}

impl ProgressState {
    pub fn new() -> Self {
        Self {
            pointer: Some(Pointer::ORIGIN),
            mash_number: None,
            current_count: 0,
        }
    }

    pub fn pointer(&self) -> Option<Pointer> {
        self.pointer
    }

    pub fn mash_number(&self) -> Option<u32> {
        self.mash_number
    }

    pub fn current_count(&self) -> u32 {
        self.current_count
    }

    /// Returns true once the pointer has been parked on the finished sentinel.
    pub fn is_finished(&self) -> bool {
        self.pointer.is_none()
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}
