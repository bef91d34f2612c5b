//! TUI application state and logic

use crate::accounts::{conforming_password, conforming_username};
use crate::core::Feedback;
use crate::game::Game;
use crate::service::{Dashboard, GameService, ServiceError, Session};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Name stem of the local TUI player, padded to the configured rules
pub const GUEST_USERNAME: &str = "Guest";

/// Application state
pub struct App {
    pub service: GameService,
    pub session: Session,
    pub today: NaiveDate,
    pub game: Option<Game>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: ThreadRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
    LimitReached,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won on guess `n`.
    pub guess_distribution: Vec<usize>,
}

impl App {
    /// Create the app with a guest player logged in
    ///
    /// # Errors
    ///
    /// Returns an error if the guest account cannot be created or logged in.
    pub fn new(mut service: GameService, today: NaiveDate) -> Result<Self> {
        let username = conforming_username(GUEST_USERNAME, service.config());
        let password = conforming_password("guest", service.config());
        if service.store().find_user(&username).is_none() {
            service.register(&username, &password, &password)?;
        }
        let session = service.login(&username, &password)?;
        let max_guesses = service.config().max_guesses_per_game;

        Ok(Self {
            service,
            session,
            today,
            game: None,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Type a word and press Enter to guess.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                guess_distribution: vec![0; max_guesses + 1],
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng: rand::rng(),
        })
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.service.config().word_length
    }

    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.service.config().max_guesses_per_game
    }

    /// Games played today and the daily limit
    #[must_use]
    pub fn games_today(&self) -> (usize, usize) {
        match self.service.dashboard(&self.session, self.today) {
            Dashboard::Player {
                games_today,
                max_games,
                ..
            } => (games_today, max_games),
            Dashboard::Admin => (0, 0),
        }
    }

    /// Feedback rows of the current game
    #[must_use]
    pub fn rows(&self) -> Vec<&Feedback> {
        self.game
            .as_ref()
            .map(|g| g.guesses().iter().map(|r| &r.feedback).collect())
            .unwrap_or_default()
    }

    pub fn new_game(&mut self) {
        match self
            .service
            .start_game(&self.session, self.today, &mut self.rng)
        {
            Ok(game) => {
                self.game = Some(game);
                self.input_buffer.clear();
                self.input_mode = InputMode::Guessing;
                let (played, max) = self.games_today();
                self.add_message(
                    &format!("New game started ({played}/{max} today)"),
                    MessageStyle::Info,
                );
            }
            Err(ServiceError::DailyLimitReached(limit)) => {
                self.input_mode = InputMode::LimitReached;
                self.add_message(
                    &format!("Daily limit reached! You can play {limit} games per day."),
                    MessageStyle::Error,
                );
            }
            Err(e) => {
                self.input_mode = InputMode::LimitReached;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn push_letter(&mut self, c: char) {
        if self.input_mode == InputMode::Guessing
            && c.is_ascii_alphabetic()
            && self.input_buffer.len() < self.word_length()
        {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn submit_guess(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match self.service.make_guess(&self.session, game, &self.input_buffer) {
            Ok(response) => {
                self.input_buffer.clear();
                if response.is_won {
                    self.stats.total_games += 1;
                    self.stats.games_won += 1;
                    if let Some(slot) = self
                        .stats
                        .guess_distribution
                        .get_mut(response.total_guesses)
                    {
                        *slot += 1;
                    }
                    self.input_mode = InputMode::GameOver;

                    let celebration = match response.total_guesses {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        _ => "🎉 NICE WORK! Got it! 🎉",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press TAB for a new game or ESC to quit.", MessageStyle::Info);
                } else if response.is_completed {
                    self.stats.total_games += 1;
                    self.input_mode = InputMode::GameOver;
                    self.add_message(
                        &format!(
                            "Out of guesses! The word was {}",
                            response.target_word.unwrap_or_default()
                        ),
                        MessageStyle::Error,
                    );
                    self.add_message("Press TAB for a new game or ESC to quit.", MessageStyle::Info);
                } else {
                    self.add_message(
                        &format!("{} guesses left", response.guesses_left),
                        MessageStyle::Info,
                    );
                }
            }
            Err(e) => {
                debug!(error = %e, "guess rejected");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.new_game(),
            KeyCode::Char(c) => self.push_letter(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter if self.input_mode == InputMode::Guessing => self.submit_guess(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn app() -> App {
        let service = GameService::new(GameConfig::default().with_words(["storm"]));
        App::new(service, NaiveDate::from_ymd_opt(2025, 5, 5).unwrap()).unwrap()
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    #[test]
    fn typing_is_limited_to_letters_and_length() {
        let mut app = app();
        app.new_game();
        for c in "st0rmy!".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input_buffer, "STRMY");
        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "STRM");
    }

    #[test]
    fn winning_updates_stats() {
        let mut app = app();
        app.new_game();
        type_word(&mut app, "brave");
        assert_eq!(app.rows().len(), 1);
        type_word(&mut app, "storm");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!(app.rows()[1].is_win());
    }

    #[test]
    fn short_guess_is_rejected_without_counting() {
        let mut app = app();
        app.new_game();
        type_word(&mut app, "sto");
        assert!(app.rows().is_empty());
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn daily_limit_blocks_fourth_game() {
        let mut app = app();
        for _ in 0..3 {
            app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
            assert_eq!(app.input_mode, InputMode::Guessing);
        }
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::LimitReached);
        assert_eq!(app.games_today(), (3, 3));
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn guest_follows_custom_account_rules() {
        let rules = GameConfig::from_toml_str(
            r##"
            required_special_chars = "#"
            min_username_length = 6
            min_password_length = 10
            words = ["storm"]
            "##,
        )
        .unwrap();
        let service = GameService::new(rules);
        let mut app = App::new(service, NaiveDate::from_ymd_opt(2025, 5, 5).unwrap()).unwrap();

        assert_eq!(app.session.username, "xGuest");
        app.new_game();
        type_word(&mut app, "storm");
        assert_eq!(app.stats.games_won, 1);
    }
}
