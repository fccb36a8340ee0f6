//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::game::MAX_ROUNDS;
use crate::output::formatters::spaced_letters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔀 UNSCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Puzzle / summary
            Constraint::Length(3), // Round progress
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    match app.input_mode {
        InputMode::Guessing => render_puzzle(f, app, chunks[0]),
        InputMode::Summary => render_summary(f, app, chunks[0]),
    }
    render_round_gauge(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from("Unscramble this word:"),
        Line::from(""),
        Line::from(Span::styled(
            spaced_letters(app.engine.scrambled_word()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Current Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🎉 Congratulations! 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("You scored {} points", app.engine.score())),
        Line::from(""),
        Line::from(vec![
            Span::styled("p", Style::default().fg(Color::Yellow)),
            Span::raw(" play again   "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" exit"),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Session Complete ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(paragraph, area);
}

fn render_round_gauge(f: &mut Frame, app: &App, area: Rect) {
    let round = app.engine.round();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(f64::from(round) / f64::from(MAX_ROUNDS))
        .label(format!("word {round} of {MAX_ROUNDS}"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(message.text.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let content = vec![
        Line::from(vec![
            Span::raw("Score:    "),
            Span::styled(
                app.engine.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(format!("Sessions: {}", stats.sessions_completed)),
        Line::from(format!("Best:     {}", stats.best_score)),
        Line::from(format!("Solved:   {}", stats.words_solved)),
        Line::from(format!("Skipped:  {}", stats.words_skipped)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Scoreboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.input_mode {
        InputMode::Guessing => (
            format!("> {}_", app.input_buffer),
            Style::default().fg(Color::White),
        ),
        InputMode::Summary => (String::new(), Style::default().fg(Color::DarkGray)),
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .title(" Your Guess ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.input_mode {
        InputMode::Guessing => "Enter submit  •  Tab skip  •  Esc quit",
        InputMode::Summary => "p play again  •  q exit",
    };

    let status = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(status, area);
}
