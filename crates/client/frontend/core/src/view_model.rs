//! View-model snapshots derived from [`mash_core::GameState`].
use mash_core::{CategoryId, GameState, OptionState, Pointer, ProgressState};

use crate::message::{MessageEntry, MessageLog};

/// High-level snapshot of the game used by presentation layers.
#[derive(Clone, Debug)]
pub struct UiFrame {
    pub counter: CounterDisplay,
    pub pointer: Option<Pointer>,
    pub finished: bool,
    pub categories: Vec<CategoryView>,
    pub messages: Vec<MessageEntry>,
}

impl UiFrame {
    pub fn from_state(state: &GameState, messages: &MessageLog, message_limit: usize) -> Self {
        let progress = state.progress();
        let pointer = progress.pointer();
        Self {
            counter: CounterDisplay::from_progress(progress),
            pointer,
            finished: progress.is_finished(),
            categories: state
                .categories
                .iter()
                .enumerate()
                .map(|(row, category)| {
                    let pointed = pointer.filter(|p| p.row == row).map(|p| p.col);
                    CategoryView {
                        id: category.id(),
                        title: category.title().to_owned(),
                        complete: category.is_complete(),
                        options: category
                            .options()
                            .iter()
                            .enumerate()
                            .map(|(col, option)| OptionView {
                                title: option.title().to_owned(),
                                state: option.state(),
                                pointed: pointed == Some(col),
                            })
                            .collect(),
                    }
                })
                .collect(),
            messages: messages.recent(message_limit).cloned().collect(),
        }
    }
}

/// The number shown next to the grid.
///
/// Between strikes it counts taps; right after a strike (count zero) it shows
/// the mash number again so the player sees the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterDisplay {
    /// No mash number has been chosen yet.
    Unarmed,
    /// Count is zero; show the threshold.
    Target(u32),
    /// Taps since the last strike.
    Counting(u32),
}

impl CounterDisplay {
    pub fn from_progress(progress: &ProgressState) -> Self {
        match (progress.mash_number(), progress.current_count()) {
            (None, _) => Self::Unarmed,
            (Some(target), 0) => Self::Target(target),
            (Some(_), count) => Self::Counting(count),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Unarmed => "-".to_owned(),
            Self::Target(value) | Self::Counting(value) => value.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CategoryView {
    pub id: CategoryId,
    pub title: String,
    pub complete: bool,
    pub options: Vec<OptionView>,
}

impl CategoryView {
    /// Winning option title, once decided.
    pub fn winner(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.state == OptionState::Chosen)
            .map(|option| option.title.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct OptionView {
    pub title: String,
    pub state: OptionState,
    /// True when the pointer rests on this option.
    pub pointed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mash_core::{Category, CategoryStore, ProgressionEngine};

    fn state() -> GameState {
        GameState::new(CategoryStore::from_categories([
            Category::from_titles("Job", ["Test", "Test2"]),
            Category::from_titles("Kids", ["1", "2"]),
        ]))
    }

    #[test]
    fn pointer_marks_exactly_one_option() {
        let mut state = state();
        ProgressionEngine::new(&mut state).advance().unwrap();

        let frame = UiFrame::from_state(&state, &MessageLog::new(4), 4);

        let marks: Vec<Vec<bool>> = frame
            .categories
            .iter()
            .map(|category| category.options.iter().map(|o| o.pointed).collect())
            .collect();
        assert_eq!(marks, vec![vec![false, true], vec![false, false]]);
        assert_eq!(frame.categories[0].title, "Job");
    }

    #[test]
    fn counter_shows_target_when_count_is_zero() {
        let mut state = state();
        let mut engine = ProgressionEngine::new(&mut state);
        assert_eq!(
            CounterDisplay::from_progress(engine.state().progress()),
            CounterDisplay::Unarmed
        );

        engine.set_mash_number(10).unwrap();
        assert_eq!(
            CounterDisplay::from_progress(engine.state().progress()).label(),
            "10"
        );

        engine.advance().unwrap();
        assert_eq!(
            CounterDisplay::from_progress(engine.state().progress()),
            CounterDisplay::Counting(1)
        );
    }

    #[test]
    fn finished_frame_reports_winners() {
        let mut state = state();
        let mut engine = ProgressionEngine::new(&mut state);
        engine.set_mash_number(1).unwrap();
        while engine.advance().unwrap() != mash_core::StepOutcome::Finished {}

        let frame = UiFrame::from_state(&state, &MessageLog::new(1), 1);

        assert!(frame.finished);
        assert_eq!(frame.pointer, None);
        assert!(frame.categories.iter().all(|c| c.complete));
        assert!(frame.categories.iter().all(|c| c.winner().is_some()));
    }
}
