//! Message log and narration of engine reports.
use std::collections::VecDeque;

use mash_core::{GameState, Pointer, StepOutcome, StepReport};

use crate::config::MessageConfig;

/// Importance of a UI message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum MessageLevel {
    /// Pointer moved.
    Info,
    /// An option was eliminated.
    Strike,
    /// A category found its winner, or the game ended.
    Result,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Tap number that produced the message, when known.
    pub tap: Option<u64>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, tap: Option<u64>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            tap,
            level,
        }
    }
}

/// Bounded log of messages shown to the player; oldest entries fall off.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = MessageEntry>) {
        for entry in entries {
            self.push(entry);
        }
    }

    /// Most recent entries first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Turns one engine report into zero or more messages.
///
/// `state` must be the session *after* the tap was applied.
pub fn narrate(
    report: &StepReport,
    state: &GameState,
    tap: u64,
    config: &MessageConfig,
) -> Vec<MessageEntry> {
    let mut messages = Vec::new();
    match report.outcome {
        StepOutcome::Step => {
            if let Some(pointer) = report.pointer.filter(|_| config.show_steps) {
                messages.push(MessageEntry::new(
                    format!("Pointer on {}", describe(state, pointer)),
                    Some(tap),
                    MessageLevel::Info,
                ));
            }
        }
        StepOutcome::Strike => {
            if let Some(discarded) = report.discarded {
                messages.push(MessageEntry::new(
                    format!("Struck out {}", describe(state, discarded)),
                    Some(tap),
                    MessageLevel::Strike,
                ));
            }
            if let Some(chosen) = report.chosen {
                messages.push(MessageEntry::new(
                    format!("Winner: {}", describe(state, chosen)),
                    Some(tap),
                    MessageLevel::Result,
                ));
            }
        }
        StepOutcome::Finished => {
            messages.push(MessageEntry::new(
                "Every category is decided",
                Some(tap),
                MessageLevel::Result,
            ));
        }
    }
    messages
}

/// `"Option" (Category)` for the cell, or the raw coordinates if it vanished.
fn describe(state: &GameState, pointer: Pointer) -> String {
    state
        .categories
        .as_slice()
        .get(pointer.row)
        .and_then(|category| {
            category
                .options()
                .get(pointer.col)
                .map(|option| format!("\"{}\" ({})", option.title(), category.title()))
        })
        .unwrap_or_else(|| pointer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mash_core::{Category, CategoryStore, ProgressionEngine};

    #[test]
    fn log_drops_oldest_entries() {
        let mut log = MessageLog::new(2);
        log.extend((0..3).map(|i| MessageEntry::new(i.to_string(), None, MessageLevel::Info)));

        let recent: Vec<_> = log.recent(5).map(|entry| entry.text.as_str()).collect();
        assert_eq!(recent, vec!["2", "1"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn strikes_and_winners_are_narrated() {
        let mut state = GameState::new(CategoryStore::from_categories([Category::from_titles(
            "Job",
            ["Doctor", "Spy"],
        )]));
        let mut engine = ProgressionEngine::new(&mut state);
        engine.set_mash_number(1).unwrap();
        let report = engine.advance_with_report().unwrap();

        let messages = narrate(&report, &state, 1, &MessageConfig::default());

        let texts: Vec<_> = messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Struck out \"Spy\" (Job)", "Winner: \"Doctor\" (Job)"]
        );
        assert_eq!(messages[1].level, MessageLevel::Result);
    }

    #[test]
    fn steps_are_quiet_unless_enabled() {
        let mut state = GameState::new(CategoryStore::from_categories([Category::from_titles(
            "Job",
            ["Doctor", "Spy"],
        )]));
        let report = ProgressionEngine::new(&mut state).advance_with_report().unwrap();

        assert!(narrate(&report, &state, 1, &MessageConfig::default()).is_empty());

        let config = MessageConfig {
            show_steps: true,
            ..MessageConfig::default()
        };
        let messages = narrate(&report, &state, 1, &config);
        assert_eq!(messages[0].text, "Pointer on \"Spy\" (Job)");
    }
}
