//! A single game: guess validation and the per-game state record
//!
//! A `Game` is owned by whoever drives play and is passed in explicitly on
//! every guess; nothing here touches storage.

use crate::accounts::UserId;
use crate::core::{EvaluateError, Feedback, Word, WordError, evaluate};
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Why a raw guess was rejected before evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess cannot be empty")]
    Empty,

    #[error("Guess must be exactly {0} letters")]
    WrongLength(usize),

    #[error("Guess must contain only letters")]
    NotAlphabetic,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidGuess(#[from] GuessError),

    #[error("Maximum guesses reached")]
    MaxGuessesReached,

    #[error("Game is already over")]
    AlreadyCompleted,

    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
}

/// Validate and normalize a raw guess
///
/// Surrounding whitespace is trimmed and letters are uppercased.
///
/// # Errors
/// Returns `GuessError` when the guess is empty, has the wrong number of
/// characters, or contains anything but letters.
///
/// # Examples
/// ```
/// use guess_word::game::validate_guess;
///
/// let word = validate_guess("  brave ", 5).unwrap();
/// assert_eq!(word.text(), "BRAVE");
/// assert!(validate_guess("br4ve", 5).is_err());
/// ```
pub fn validate_guess(raw: &str, word_length: usize) -> Result<Word, GuessError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GuessError::Empty);
    }

    if trimmed.chars().count() != word_length {
        return Err(GuessError::WrongLength(word_length));
    }

    Word::with_length(trimmed, word_length).map_err(|e| match e {
        WordError::InvalidLength { expected, .. } => GuessError::WrongLength(expected),
        WordError::NonAscii | WordError::InvalidCharacters => GuessError::NotAlphabetic,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One evaluated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// What a caller gets back after each guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResponse {
    pub feedback: Feedback,
    pub is_won: bool,
    pub is_completed: bool,
    pub guesses_left: usize,
    /// Revealed once the game is over.
    pub target_word: Option<String>,
    pub total_guesses: usize,
}

/// State of a game in progress or finished
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    user_id: UserId,
    target: Word,
    date: NaiveDate,
    guesses: Vec<GuessRecord>,
    completed: bool,
    won: bool,
}

impl Game {
    #[must_use]
    pub fn new(id: GameId, user_id: UserId, target: Word, date: NaiveDate) -> Self {
        Self {
            id,
            user_id,
            target,
            date,
            guesses: Vec::new(),
            completed: false,
            won: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn guesses_left(&self, max_guesses: usize) -> usize {
        max_guesses.saturating_sub(self.guesses.len())
    }

    /// The target word, only once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.completed.then_some(&self.target)
    }

    /// Validate, evaluate and record a guess
    ///
    /// The game is won when the guess equals the target and completed when it
    /// is won or `max_guesses` guesses have been made.
    ///
    /// # Errors
    /// Returns `GameError` if the game is over, the guess limit is reached, or
    /// the guess is malformed. A rejected guess leaves the game unchanged.
    pub fn submit(&mut self, raw: &str, max_guesses: usize) -> Result<GuessResponse, GameError> {
        if self.completed {
            return Err(GameError::AlreadyCompleted);
        }

        let guess = validate_guess(raw, self.target.len())?;

        if self.guesses.len() >= max_guesses {
            return Err(GameError::MaxGuessesReached);
        }

        let feedback = evaluate(&guess, &self.target)?;

        self.won = guess == self.target;
        self.guesses.push(GuessRecord {
            word: guess,
            feedback: feedback.clone(),
        });
        self.completed = self.won || self.guesses.len() >= max_guesses;

        Ok(GuessResponse {
            feedback,
            is_won: self.won,
            is_completed: self.completed,
            guesses_left: self.guesses_left(max_guesses),
            target_word: self.revealed_target().map(|w| w.text().to_string()),
            total_guesses: self.guesses.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    fn game(target: &str) -> Game {
        Game::new(
            GameId(1),
            UserId(7),
            Word::new(target).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn validate_guess_normalizes() {
        assert_eq!(validate_guess(" peace\n", 5).unwrap().text(), "PEACE");
    }

    #[test]
    fn validate_guess_rejections() {
        assert_eq!(validate_guess("", 5), Err(GuessError::Empty));
        assert_eq!(validate_guess("   ", 5), Err(GuessError::Empty));
        assert_eq!(validate_guess("peaces", 5), Err(GuessError::WrongLength(5)));
        assert_eq!(validate_guess("pea", 5), Err(GuessError::WrongLength(5)));
        assert_eq!(validate_guess("pe ce", 5), Err(GuessError::NotAlphabetic));
        assert_eq!(validate_guess("pé@ce", 5), Err(GuessError::NotAlphabetic));
    }

    #[test]
    fn winning_guess_completes_game() {
        let mut g = game("STORM");
        let response = g.submit("storm", 5).unwrap();

        assert!(response.is_won);
        assert!(response.is_completed);
        assert_eq!(response.total_guesses, 1);
        assert_eq!(response.guesses_left, 4);
        assert_eq!(response.target_word.as_deref(), Some("STORM"));
        assert!(g.is_won());
        assert!(g.is_completed());
    }

    #[test]
    fn losing_game_ends_at_guess_limit() {
        let mut g = game("STORM");

        for turn in 1..=2 {
            let response = g.submit("BRAVE", 3).unwrap();
            assert!(!response.is_completed);
            assert_eq!(response.target_word, None);
            assert_eq!(response.total_guesses, turn);
        }

        let last = g.submit("SMORT", 3).unwrap();
        assert!(!last.is_won);
        assert!(last.is_completed);
        assert_eq!(last.guesses_left, 0);
        assert_eq!(last.target_word.as_deref(), Some("STORM"));

        assert_eq!(g.submit("STORM", 3), Err(GameError::AlreadyCompleted));
    }

    #[test]
    fn invalid_guess_does_not_count() {
        let mut g = game("QUEEN");
        assert_eq!(
            g.submit("QU33N", 5),
            Err(GameError::InvalidGuess(GuessError::NotAlphabetic))
        );
        assert!(g.guesses().is_empty());
        assert_eq!(g.guesses_left(5), 5);
    }

    #[test]
    fn guess_records_keep_feedback() {
        let mut g = game("QUEEN");
        g.submit("EERIE", 5).unwrap();

        let record = &g.guesses()[0];
        assert_eq!(record.word.text(), "EERIE");
        assert_eq!(record.feedback.count(LetterStatus::WrongPosition), 2);
        assert_eq!(record.feedback.count(LetterStatus::Correct), 0);
        assert_eq!(g.revealed_target(), None);
    }
}
