//! In-memory game store
//!
//! Holds users, target words, game rows and guesses. Callers own a `Store`
//! value and pass it where needed; there is no global instance.

mod reports;

pub use reports::{DailyReport, UserReportRow};

use crate::accounts::{PasswordHash, Role, User, UserId};
use crate::core::Word;
use crate::game::GameId;
use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("No such game: {0}")]
    UnknownGame(GameId),

    #[error("No words available")]
    NoWords,
}

/// Stored summary of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRow {
    pub id: GameId,
    pub user_id: UserId,
    pub target: Word,
    pub date: NaiveDate,
    pub completed: bool,
    pub won: bool,
}

/// Stored guess, numbered from 1 within its game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub game_id: GameId,
    pub word: Word,
    pub number: usize,
}

#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    user_index: FxHashMap<String, UserId>,
    words: Vec<Word>,
    games: Vec<GameRow>,
    guesses: Vec<GuessRow>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- users ---

    /// Create an account
    ///
    /// # Errors
    /// Returns `StoreError::UsernameTaken` if the name is already registered.
    pub fn create_user(
        &mut self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<UserId, StoreError> {
        if self.user_index.contains_key(username) {
            return Err(StoreError::UsernameTaken);
        }

        let id = UserId(self.users.len() as u64 + 1);
        self.users.push(User {
            id,
            username: username.to_string(),
            password_hash: PasswordHash::new(password),
            role,
        });
        self.user_index.insert(username.to_string(), id);
        Ok(id)
    }

    #[must_use]
    pub fn find_user(&self, username: &str) -> Option<&User> {
        self.user_index
            .get(username)
            .and_then(|&id| self.user(id))
    }

    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        let index = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.users.get(index)
    }

    /// Player usernames, sorted
    #[must_use]
    pub fn players(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .users
            .iter()
            .filter(|u| u.is_player())
            .map(|u| u.username.clone())
            .collect();
        names.sort();
        names
    }

    // --- words ---

    /// Add a word unless it is already present; returns whether it was added
    pub fn add_word(&mut self, word: Word) -> bool {
        if self.words.contains(&word) {
            return false;
        }
        self.words.push(word);
        true
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick a target word uniformly at random
    ///
    /// # Errors
    /// Returns `StoreError::NoWords` if no words were loaded.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, StoreError> {
        self.words.choose(rng).cloned().ok_or(StoreError::NoWords)
    }

    // --- games ---

    pub fn create_game(&mut self, user_id: UserId, target: Word, date: NaiveDate) -> GameId {
        let id = GameId(self.games.len() as u64 + 1);
        self.games.push(GameRow {
            id,
            user_id,
            target,
            date,
            completed: false,
            won: false,
        });
        id
    }

    #[must_use]
    pub fn game(&self, id: GameId) -> Option<&GameRow> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Record a guess against a stored game
    ///
    /// # Errors
    /// Returns `StoreError::UnknownGame` if the game does not exist.
    pub fn save_guess(
        &mut self,
        game_id: GameId,
        word: Word,
        number: usize,
    ) -> Result<(), StoreError> {
        if self.game(game_id).is_none() {
            return Err(StoreError::UnknownGame(game_id));
        }
        self.guesses.push(GuessRow {
            game_id,
            word,
            number,
        });
        Ok(())
    }

    /// Mark a game finished
    ///
    /// # Errors
    /// Returns `StoreError::UnknownGame` if the game does not exist.
    pub fn complete_game(&mut self, game_id: GameId, won: bool) -> Result<(), StoreError> {
        let game = self
            .games
            .iter_mut()
            .find(|g| g.id == game_id)
            .ok_or(StoreError::UnknownGame(game_id))?;
        game.completed = true;
        game.won = won;
        Ok(())
    }

    /// Guesses stored for a game, in order
    pub fn guesses_for(&self, game_id: GameId) -> impl Iterator<Item = &GuessRow> {
        self.guesses.iter().filter(move |g| g.game_id == game_id)
    }

    /// Games a user started on a date, finished or not
    #[must_use]
    pub fn daily_game_count(&self, user_id: UserId, date: NaiveDate) -> usize {
        self.games
            .iter()
            .filter(|g| g.user_id == user_id && g.date == date)
            .count()
    }

    // --- reports ---

    #[must_use]
    pub fn daily_report(&self, date: NaiveDate) -> DailyReport {
        reports::daily_report(&self.games, date)
    }

    /// Per-day activity for a username, newest day first
    ///
    /// An unregistered name has no games and yields no rows.
    #[must_use]
    pub fn user_report(&self, username: &str) -> Vec<UserReportRow> {
        self.find_user(username)
            .map(|user| reports::user_report(&self.games, user.id))
            .unwrap_or_default()
    }
}
