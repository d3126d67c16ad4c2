//! Tap-driven elimination engine.
//!
//! The [`ProgressionEngine`] is the authoritative reducer for the progress
//! half of [`GameState`]. Each external tap calls [`ProgressionEngine::advance`]
//! once: the pointer orbits every unresolved option across all categories,
//! and every `mash_number`-th tap eliminates the option under the pointer.

mod errors;
mod step;
mod traversal;

pub use errors::EngineError;
pub use step::{StepOutcome, StepReport};

use crate::state::{GameState, OptionState, Pointer, ProgressState};
use traversal::Walk;

/// Engine that advances the pointer, counts taps and fires eliminations.
///
/// The engine borrows the session for as long as the caller drives it. It is
/// the only writer of pointer, counter and option states.
pub struct ProgressionEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> ProgressionEngine<'a> {
    /// Creates a new engine over the given session.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Read-only view of the session being driven.
    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn pointer(&self) -> Option<Pointer> {
        self.state.progress().pointer()
    }

    pub fn mash_number(&self) -> Option<u32> {
        self.state.progress().mash_number()
    }

    pub fn current_count(&self) -> u32 {
        self.state.progress().current_count()
    }

    /// Sets the elimination threshold and restarts the tap count.
    ///
    /// Pointer and option states are left untouched.
    pub fn set_mash_number(&mut self, mash_number: u32) -> Result<(), EngineError> {
        if mash_number == 0 {
            return Err(EngineError::InvalidMashNumber(mash_number));
        }
        let progress = self.state.progress_mut();
        progress.mash_number = Some(mash_number);
        progress.current_count = 0;
        tracing::debug!(mash_number, "mash number set");
        Ok(())
    }

    /// Processes one tap.
    ///
    /// Returns [`StepOutcome::Finished`] once every category is resolved, and
    /// keeps returning it without touching the grid on further calls.
    pub fn advance(&mut self) -> Result<StepOutcome, EngineError> {
        self.advance_with_report().map(|report| report.outcome)
    }

    /// Processes one tap and reports which cells changed.
    pub fn advance_with_report(&mut self) -> Result<StepReport, EngineError> {
        // Unarmed taps only move the pointer.
        if self.mash_number().is_some() {
            self.collapse_lone_survivors();
        }

        if self.state.is_complete() {
            self.state.progress_mut().pointer = None;
            return Ok(StepReport::finished());
        }

        let from = self.pointer().unwrap_or(Pointer::ORIGIN);
        let cell = match traversal::next_waiting(self.state.categories.as_slice(), from) {
            Walk::Found(cell) => cell,
            Walk::Exhausted { scanned } => {
                tracing::error!(
                    %from,
                    scanned,
                    "grid reports unresolved categories but holds no waiting option"
                );
                return Err(EngineError::no_waiting_option(from, scanned));
            }
        };

        let progress = self.state.progress_mut();
        progress.pointer = Some(cell);
        progress.current_count = progress.current_count.saturating_add(1);
        if progress.mash_number != Some(progress.current_count) {
            return Ok(StepReport::step(cell));
        }
        progress.current_count = 0;

        let category = &mut self.state.categories.categories_mut()[cell.row];
        category.discard(cell.col);
        let chosen = category.collapse_to_survivor();
        tracing::debug!(
            category = %category.id(),
            %cell,
            option = category.options()[cell.col].title(),
            chosen = ?chosen,
            "strike"
        );

        Ok(StepReport::strike(cell, chosen))
    }

    /// Restarts the session: pointer to the origin, mash number unset, count
    /// zero and every option back to `Waiting`. Categories stay in place.
    pub fn reset(&mut self) {
        *self.state.progress_mut() = ProgressState::new();
        for category in self.state.categories.categories_mut() {
            category.reset_options();
        }
        tracing::debug!(categories = self.state.categories.len(), "game reset");
    }

    /// Resolves categories whose only standing option is still `Waiting`.
    ///
    /// Strikes collapse categories as they shrink, so this only matters for
    /// categories that start the game with a single candidate. Runs on armed
    /// taps only.
    fn collapse_lone_survivors(&mut self) {
        for category in self.state.categories.categories_mut() {
            if category.is_complete() || category.chosen().is_some() {
                continue;
            }
            let standing = category
                .options()
                .iter()
                .filter(|option| option.state() != OptionState::Discarded)
                .count();
            if standing == 1 {
                let chosen = category.collapse_to_survivor();
                tracing::debug!(
                    category = %category.id(),
                    chosen = ?chosen,
                    "lone option resolved"
                );
            }
        }
    }
}
