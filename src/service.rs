//! Application flows: accounts, daily limits, play and admin reports
//!
//! `GameService` owns the configuration and the store. Every operation takes
//! the caller's [`Session`] and, where it matters, the calendar date, so
//! nothing depends on ambient state.

use crate::accounts::{AccountError, Role, UserId, validate_password, validate_username};
use crate::config::GameConfig;
use crate::core::Word;
use crate::game::{Game, GameError, GuessResponse};
use crate::store::{DailyReport, Store, StoreError, UserReportRow};
use crate::wordlists::INITIAL_WORDS;
use crate::wordlists::loader::words_from_slice;
use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid username")]
    UnknownUser,

    #[error("Invalid password")]
    WrongPassword,

    #[error("Admin access required")]
    AdminRequired,

    #[error("Admins cannot play the game")]
    AdminCannotPlay,

    #[error("Daily limit reached! You can play {0} games per day.")]
    DailyLimitReached(usize),

    #[error("Game belongs to another player")]
    NotYourGame,

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The logged-in user, handed back by [`GameService::login`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
}

impl Session {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Landing view after login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashboard {
    Admin,
    Player {
        games_today: usize,
        can_play: bool,
        max_games: usize,
    },
}

#[derive(Debug)]
pub struct GameService {
    config: GameConfig,
    store: Store,
}

impl GameService {
    /// Build a service with a fresh store seeded with words and the admin account
    ///
    /// Words come from `config.words`, or the embedded list when that is empty.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let words = if config.words.is_empty() {
            words_from_slice(INITIAL_WORDS, config.word_length)
        } else {
            words_from_slice(&config.words, config.word_length)
        };
        Self::with_words(config, words)
    }

    /// Build a service with an explicit word list
    #[must_use]
    pub fn with_words(config: GameConfig, words: Vec<Word>) -> Self {
        let mut store = Store::new();

        let mut loaded = 0;
        for word in words {
            if store.add_word(word) {
                loaded += 1;
            }
        }
        if loaded == 0 {
            warn!("word store is empty; games cannot start");
        }

        if store
            .create_user(&config.admin_username, &config.admin_password, Role::Admin)
            .is_err()
        {
            warn!(username = %config.admin_username, "admin account already present");
        }

        info!(words = loaded, admin = %config.admin_username, "store seeded");
        Self { config, store }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Create a player account
    ///
    /// # Errors
    /// Fails on invalid username or password, mismatched confirmation, or a
    /// taken username.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<UserId, ServiceError> {
        let username = username.trim();
        validate_username(username, &self.config)?;
        validate_password(password, &self.config)?;
        if password != confirm_password {
            return Err(ServiceError::PasswordMismatch);
        }

        let id = self
            .store
            .create_user(username, password, Role::Player)
            .inspect_err(|e| warn!(%username, error = %e, "registration rejected"))?;
        info!(%username, user_id = %id, "player registered");
        Ok(id)
    }

    /// Check credentials and open a session
    ///
    /// # Errors
    /// `UnknownUser` or `WrongPassword`.
    pub fn login(&self, username: &str, password: &str) -> Result<Session, ServiceError> {
        let username = username.trim();
        let Some(user) = self.store.find_user(username) else {
            warn!(%username, "login for unknown user");
            return Err(ServiceError::UnknownUser);
        };

        if !user.password_hash.verify(password) {
            warn!(%username, "login with wrong password");
            return Err(ServiceError::WrongPassword);
        }

        info!(%username, role = %user.role, "logged in");
        Ok(Session {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
        })
    }

    #[must_use]
    pub fn dashboard(&self, session: &Session, date: NaiveDate) -> Dashboard {
        if session.is_admin() {
            return Dashboard::Admin;
        }

        let games_today = self.store.daily_game_count(session.user_id, date);
        Dashboard::Player {
            games_today,
            can_play: games_today < self.config.max_daily_games,
            max_games: self.config.max_daily_games,
        }
    }

    /// Start a game with a random target word
    ///
    /// # Errors
    /// Admins cannot play; players are held to the daily game limit; fails if
    /// the store has no words.
    pub fn start_game<R: Rng + ?Sized>(
        &mut self,
        session: &Session,
        date: NaiveDate,
        rng: &mut R,
    ) -> Result<Game, ServiceError> {
        if session.is_admin() {
            return Err(ServiceError::AdminCannotPlay);
        }

        let games_today = self.store.daily_game_count(session.user_id, date);
        if games_today >= self.config.max_daily_games {
            warn!(username = %session.username, %date, games_today, "daily limit reached");
            return Err(ServiceError::DailyLimitReached(self.config.max_daily_games));
        }

        let target = self.store.random_word(rng)?;
        let id = self.store.create_game(session.user_id, target.clone(), date);
        info!(username = %session.username, game_id = %id, %date, "game started");

        Ok(Game::new(id, session.user_id, target, date))
    }

    /// Submit a guess for the session's game and persist the result
    ///
    /// # Errors
    /// Fails if the game belongs to someone else or the guess is rejected.
    pub fn make_guess(
        &mut self,
        session: &Session,
        game: &mut Game,
        raw: &str,
    ) -> Result<GuessResponse, ServiceError> {
        if game.user_id() != session.user_id {
            return Err(ServiceError::NotYourGame);
        }

        let response = game.submit(raw, self.config.max_guesses_per_game)?;

        if let Some(record) = game.guesses().last() {
            self.store
                .save_guess(game.id(), record.word.clone(), response.total_guesses)?;
        }
        debug!(
            game_id = %game.id(),
            guess = %response.feedback.letters(),
            tiles = %response.feedback.to_symbols(),
            "guess evaluated"
        );

        if response.is_completed {
            self.store.complete_game(game.id(), response.is_won)?;
            info!(
                username = %session.username,
                game_id = %game.id(),
                won = response.is_won,
                guesses = response.total_guesses,
                "game completed"
            );
        }

        Ok(response)
    }

    /// # Errors
    /// `AdminRequired` for non-admin sessions.
    pub fn daily_report(
        &self,
        session: &Session,
        date: NaiveDate,
    ) -> Result<DailyReport, ServiceError> {
        require_admin(session)?;
        Ok(self.store.daily_report(date))
    }

    /// # Errors
    /// `AdminRequired` for non-admin sessions.
    pub fn user_report(
        &self,
        session: &Session,
        username: &str,
    ) -> Result<Vec<UserReportRow>, ServiceError> {
        require_admin(session)?;
        Ok(self.store.user_report(username))
    }

    /// # Errors
    /// `AdminRequired` for non-admin sessions.
    pub fn players(&self, session: &Session) -> Result<Vec<String>, ServiceError> {
        require_admin(session)?;
        Ok(self.store.players())
    }
}

fn require_admin(session: &Session) -> Result<(), ServiceError> {
    if session.is_admin() {
        Ok(())
    } else {
        warn!(username = %session.username, "admin-only operation refused");
        Err(ServiceError::AdminRequired)
    }
}
