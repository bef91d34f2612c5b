//! Game configuration
//!
//! Limits, validation rules and the seed admin account, loadable from TOML.
//! Every field has a default, so a partial file (or none at all) is fine.
//!
//! ```
//! use guess_word::config::GameConfig;
//!
//! let config = GameConfig::from_toml_str(r#"
//!     max_daily_games = 5
//!     words = ["apple", "brave"]
//! "#).unwrap();
//!
//! assert_eq!(config.max_daily_games, 5);
//! assert_eq!(config.max_guesses_per_game, 5);
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Game rules and account settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GameConfig {
    /// Games a player may start per calendar day.
    pub max_daily_games: usize,

    /// Guesses allowed in a single game.
    pub max_guesses_per_game: usize,

    /// Letters per word.
    pub word_length: usize,

    pub min_username_length: usize,

    pub min_password_length: usize,

    /// A password must contain at least one of these.
    pub required_special_chars: String,

    /// Admin account created when the store is seeded.
    pub admin_username: String,

    pub admin_password: String,

    /// Target words. Empty means the embedded seed list.
    pub words: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_daily_games: 3,
            max_guesses_per_game: 5,
            word_length: 5,
            min_username_length: 5,
            min_password_length: 5,
            required_special_chars: "$%*@".to_string(),
            admin_username: "Admin".to_string(),
            admin_password: "Admin@123".to_string(),
            words: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, holds invalid TOML, or fails
    /// [`GameConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error on invalid TOML or invalid values.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that limits are non-zero and configured words fit `word_length`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_daily_games == 0 {
            return Err(ConfigError::Invalid("max_daily_games must be at least 1".into()));
        }
        if self.max_guesses_per_game == 0 {
            return Err(ConfigError::Invalid(
                "max_guesses_per_game must be at least 1".into(),
            ));
        }
        if self.word_length == 0 {
            return Err(ConfigError::Invalid("word_length must be at least 1".into()));
        }
        if self.required_special_chars.is_empty() {
            return Err(ConfigError::Invalid(
                "required_special_chars must not be empty".into(),
            ));
        }
        if let Some(word) = self.words.iter().find(|w| {
            w.len() != self.word_length || !w.bytes().all(|b| b.is_ascii_alphabetic())
        }) {
            return Err(ConfigError::Invalid(format!(
                "word '{word}' is not {} letters",
                self.word_length
            )));
        }
        Ok(())
    }

    /// Sets the daily game limit.
    #[must_use]
    pub fn with_max_daily_games(mut self, games: usize) -> Self {
        self.max_daily_games = games;
        self
    }

    /// Sets the guess limit per game.
    #[must_use]
    pub fn with_max_guesses(mut self, guesses: usize) -> Self {
        self.max_guesses_per_game = guesses;
        self
    }

    /// Replaces the target word list.
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }
}
