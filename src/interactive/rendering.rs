//! TUI rendering with ratatui
//!
//! Board of colored tiles plus messages, statistics and input panels.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, LetterStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
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

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 GUESS THE WORD")
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

const fn tile_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::WrongPosition => Color::Yellow,
        LetterStatus::NotInWord => Color::DarkGray,
    }
}

fn feedback_line(feedback: &Feedback) -> Line<'static> {
    let spans: Vec<Span> = feedback
        .iter()
        .flat_map(|o| {
            [
                Span::styled(
                    format!(" {} ", o.letter()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(tile_color(o.status()))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn pending_line(letters: &str, width: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(width * 2);
    let mut chars = letters.chars();
    for _ in 0..width {
        let text = chars.next().map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
        spans.push(Span::styled(
            text,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let rows = app.rows();
    let width = app.word_length();
    let mut lines = Vec::with_capacity(app.max_guesses() * 2);

    for i in 0..app.max_guesses() {
        let line = match rows.get(i) {
            Some(feedback) => feedback_line(feedback),
            None if i == rows.len() && app.input_mode == InputMode::Guessing => {
                pending_line(&app.input_buffer, width)
            }
            None => pending_line("", width),
        };
        lines.push(line);
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Daily games gauge
            Constraint::Percentage(50), // Distribution
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_daily_progress(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_daily_progress(f: &mut Frame, app: &App, area: Rect) {
    let (played, max) = app.games_today();
    let percent = if max == 0 {
        0
    } else {
        ((played * 100) / max).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Games Today ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{played}/{max}"));

    f.render_widget(gauge, area);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let max_count = app
        .stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    let lines: Vec<Line> = app
        .stats
        .guess_distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(guesses, &count)| {
            let bar_len = count * 20 / max_count;
            Line::from(vec![
                Span::raw(format!("{guesses}: ")),
                Span::styled("█".repeat(bar_len), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guessing => (" Type a word, Enter to guess ", Color::Yellow),
        InputMode::GameOver => (" Game over | TAB for new game, ESC to quit ", Color::Green),
        InputMode::LimitReached => (" Daily limit reached | ESC to quit ", Color::Red),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let player = Paragraph::new(format!("Player: {}", app.session.username))
        .alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let guesses_left = app
        .game
        .as_ref()
        .map_or(0, |g| g.guesses_left(app.max_guesses()));
    f.render_widget(
        Paragraph::new(format!("Guesses left: {guesses_left}")).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("ESC: Quit | TAB: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
