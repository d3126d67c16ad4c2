//! Terminal rendering of [`UiFrame`] snapshots.
//!
//! The screen is split into a header with the counter, the category grid, the
//! message panel and a one-line key reference.
use mash_core::OptionState;
use mash_frontend_core::{CategoryView, MessageLevel, OptionView, UiFrame};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const HELP: &str = "[space] mash  [1-9] mash number  [r] reset  [q] quit";
const BLANK_TITLE: &str = "(blank)";

/// Draws the whole screen.
pub fn render(frame: &mut Frame, ui: &UiFrame) {
    let message_rows = u16::try_from(ui.messages.len()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(message_rows.saturating_add(2)),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let header = Paragraph::new(header_line(ui))
        .block(Block::default().borders(Borders::ALL).title("MASH"));
    frame.render_widget(header, chunks[0]);

    let grid = Paragraph::new(grid_lines(ui))
        .block(Block::default().borders(Borders::ALL).title("Categories"));
    frame.render_widget(grid, chunks[1]);

    let messages = Paragraph::new(message_lines(ui))
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .wrap(Wrap { trim: true });
    frame.render_widget(messages, chunks[2]);

    let footer = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[3]);
}

fn header_line(ui: &UiFrame) -> Line<'static> {
    let mut spans = vec![
        Span::raw("Mash number: "),
        Span::styled(
            ui.counter.label(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if ui.finished {
        spans.push(Span::styled(
            "  [FINISHED]",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

/// Category titles followed by their options, one line each.
pub fn grid_lines(ui: &UiFrame) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for category in &ui.categories {
        lines.push(category_line(category));
        lines.extend(category.options.iter().map(option_line));
    }
    lines
}

fn category_line(category: &CategoryView) -> Line<'static> {
    let style = if category.complete {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Line::from(Span::styled(
        category.title.clone(),
        style.add_modifier(Modifier::BOLD),
    ))
}

fn option_line(option: &OptionView) -> Line<'static> {
    let title = if option.title.is_empty() {
        BLANK_TITLE.to_owned()
    } else {
        option.title.clone()
    };

    let mut style = match option.state {
        OptionState::Waiting => Style::default(),
        OptionState::Chosen => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        OptionState::Discarded => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
    };
    if option.pointed {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let cursor = if option.pointed { "> " } else { "  " };
    Line::from(vec![
        Span::raw(format!("  {cursor}{} ", state_marker(option.state))),
        Span::styled(title, style),
    ])
}

fn message_lines(ui: &UiFrame) -> Vec<Line<'static>> {
    // Frames carry the newest message first; show oldest at the top.
    ui.messages
        .iter()
        .rev()
        .map(|message| {
            let style = match message.level {
                MessageLevel::Info => Style::default(),
                MessageLevel::Strike => Style::default().fg(Color::LightRed),
                MessageLevel::Result => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            };
            Line::from(Span::styled(message.text.clone(), style))
        })
        .collect()
}

/// One `Category: winner` line per category, for the end of an automatic run.
pub fn format_summary(ui: &UiFrame) -> Vec<String> {
    ui.categories
        .iter()
        .map(|category| {
            let winner = match category.winner() {
                Some("") => BLANK_TITLE,
                Some(title) => title,
                None => "undecided",
            };
            format!("{}: {winner}", category.title)
        })
        .collect()
}

fn state_marker(state: OptionState) -> char {
    match state {
        OptionState::Waiting => ' ',
        OptionState::Chosen => '*',
        OptionState::Discarded => 'x',
    }
}
