//! Glue code tying category loading, the progression engine and the terminal together.
use std::io::{self, Write};

use anyhow::{Result, bail};
use crossterm::event::{self, Event};
use mash_content::{PresetLoader, PresetSource, populate};
use mash_core::{CategoryStore, GameState, ProgressionEngine, StepOutcome};
use mash_frontend_core::{MessageEntry, MessageLevel, MessageLog, UiFrame, narrate};
use ratatui::DefaultTerminal;

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::render;

pub struct App {
    config: CliConfig,
    state: GameState,
    messages: MessageLog,
    taps: u64,
}

impl App {
    /// Loads categories and applies the configured mash number.
    pub fn new(config: CliConfig) -> Result<Self> {
        let store = load_categories(&config)?;
        let mut state = GameState::new(store);
        if let Some(mash_number) = config.game.mash_number {
            ProgressionEngine::new(&mut state).set_mash_number(mash_number)?;
        }

        let messages = MessageLog::new(config.frontend.messages.capacity);
        Ok(Self {
            config,
            state,
            messages,
            taps: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frame(&self) -> UiFrame {
        UiFrame::from_state(
            &self.state,
            &self.messages,
            self.config.frontend.messages.frame_limit,
        )
    }

    /// One tap. Narration for the tap lands in the message log.
    pub fn mash(&mut self) -> Result<StepOutcome> {
        let already_finished = self.state.progress().is_finished();
        let report = ProgressionEngine::new(&mut self.state).advance_with_report()?;
        if !already_finished {
            self.taps += 1;
            let messages = &self.config.frontend.messages;
            let entries = narrate(&report, &self.state, self.taps, messages);
            self.messages.extend(entries);
        }
        Ok(report.outcome)
    }

    pub fn set_mash_number(&mut self, mash_number: u32) -> Result<()> {
        ProgressionEngine::new(&mut self.state).set_mash_number(mash_number)?;
        self.messages.push(MessageEntry::new(
            format!("Mash number set to {mash_number}"),
            None,
            MessageLevel::Info,
        ));
        Ok(())
    }

    /// Same categories, every option waiting again.
    ///
    /// The engine forgets the mash number on reset; the player's choice is
    /// applied again so a new round can start right away.
    pub fn reset(&mut self) -> Result<()> {
        let mash_number = self.state.progress().mash_number();
        let mut engine = ProgressionEngine::new(&mut self.state);
        engine.reset();
        if let Some(mash_number) = mash_number {
            engine.set_mash_number(mash_number)?;
        }
        self.messages.clear();
        self.taps = 0;
        tracing::info!("game reset");
        Ok(())
    }

    pub fn run(self) -> Result<()> {
        if self.config.auto {
            self.run_auto()
        } else {
            self.run_interactive()
        }
    }

    /// Mashes until every category is decided, then prints the winners.
    fn run_auto(mut self) -> Result<()> {
        if self.state.progress().mash_number().is_none() {
            bail!("automatic play needs a mash number (set MASH_NUMBER)");
        }

        while self.mash()? != StepOutcome::Finished {}
        tracing::info!(taps = self.taps, "game finished");

        let mut stdout = io::stdout().lock();
        for line in render::format_summary(&self.frame()) {
            writeln!(stdout, "{line}")?;
        }
        Ok(())
    }

    fn run_interactive(mut self) -> Result<()> {
        let input = InputHandler::new();
        let mut terminal = TerminalGuard::enter()?;

        loop {
            let frame = self.frame();
            terminal.draw(|f| render::render(f, &frame))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            match input.handle_key(key) {
                KeyAction::Quit => break,
                KeyAction::Mash => {
                    if self.state.progress().mash_number().is_none() {
                        self.messages.push(MessageEntry::new(
                            "Pick a mash number (1-9) first",
                            None,
                            MessageLevel::Info,
                        ));
                    } else {
                        self.mash()?;
                    }
                }
                KeyAction::SetMashNumber(mash_number) => self.set_mash_number(mash_number)?,
                KeyAction::Reset => self.reset()?,
                KeyAction::None => {}
            }
        }

        Ok(())
    }
}

fn load_categories(config: &CliConfig) -> Result<CategoryStore> {
    let name = config.preset_name();
    let source = match &config.categories_file {
        Some(path) => PresetSource::from_catalog(PresetLoader::load(path)?, name),
        None => PresetSource::builtin(name)?,
    };

    let mut store = CategoryStore::new();
    populate(&mut store, &source)?;
    if store.is_empty() {
        let available: Vec<_> = source.names().collect();
        bail!(
            "category set '{name}' is empty or unknown (available: {})",
            available.join(", ")
        );
    }
    Ok(store)
}

/// Raw mode plus the alternate screen, undone on drop.
struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        Ok(Self {
            terminal: ratatui::try_init()?,
        })
    }

    fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(error) = ratatui::try_restore() {
            tracing::error!(%error, "failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mash_core::GameConfig;

    fn config(mash_number: Option<u32>) -> CliConfig {
        let game = GameConfig::new();
        CliConfig {
            game: match mash_number {
                Some(mash_number) => game.with_mash_number(mash_number),
                None => game,
            },
            ..CliConfig::default()
        }
    }

    #[test]
    fn builtin_preset_loads_four_categories() {
        let app = App::new(config(Some(3))).unwrap();

        assert_eq!(app.state().categories.len(), 4);
        assert_eq!(app.state().progress().mash_number(), Some(3));
    }

    #[test]
    fn unknown_preset_is_rejected_with_the_available_names() {
        let mut config = config(None);
        config.game = config.game.with_preset("Nope");

        let message = App::new(config).err().unwrap().to_string();

        assert!(message.contains("'Nope'"));
        assert!(message.contains("Software Engineer, Traditional"));
    }

    #[test]
    fn preset_can_be_picked_by_name() {
        let mut config = config(Some(2));
        config.game = config.game.with_preset("Software Engineer");

        let app = App::new(config).unwrap();

        assert_eq!(app.state().categories.len(), 4);
        assert_eq!(app.config.preset_name(), "Software Engineer");
    }

    #[test]
    fn mashing_to_the_end_announces_once() {
        let mut app = App::new(config(Some(4))).unwrap();
        while app.mash().unwrap() != StepOutcome::Finished {}
        let taps = app.taps;

        assert_eq!(app.mash().unwrap(), StepOutcome::Finished);
        assert_eq!(app.taps, taps);
        assert!(app.state().is_complete());
        let announcements = app
            .messages
            .iter()
            .filter(|entry| entry.text == "Every category is decided")
            .count();
        assert_eq!(announcements, 1);
    }

    #[test]
    fn reset_clears_progress_and_messages() {
        let mut app = App::new(config(Some(2))).unwrap();
        for _ in 0..5 {
            app.mash().unwrap();
        }

        app.reset().unwrap();

        assert_eq!(app.taps, 0);
        assert!(app.messages.is_empty());
        assert_eq!(app.state().progress().current_count(), 0);
        assert_eq!(app.state().progress().mash_number(), Some(2));
    }
}
