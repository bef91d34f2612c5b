//! Per-letter feedback for an evaluated guess
//!
//! Each guess position receives one of three statuses:
//! - `Correct` (green): letter in the correct position
//! - `WrongPosition` (yellow): letter in the word, wrong position
//! - `NotInWord` (gray): letter not among the target's unmatched letters

use std::fmt;

/// Status of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Correct,
    WrongPosition,
    NotInWord,
}

impl LetterStatus {
    /// Stable lowercase name, as used in stored and transmitted results
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::WrongPosition => "wrong_position",
            Self::NotInWord => "not_in_word",
        }
    }

    /// Single-character tile symbol: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::WrongPosition => 'Y',
            Self::NotInWord => '-',
        }
    }

    /// Colored square emoji for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongPosition => '🟨',
            Self::NotInWord => '⬜',
        }
    }

    /// True for statuses that consume a letter of the target
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Correct | Self::WrongPosition)
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterOutcome {
    letter: char,
    status: LetterStatus,
    position: usize,
}

impl LetterOutcome {
    #[must_use]
    pub const fn new(letter: char, status: LetterStatus, position: usize) -> Self {
        Self {
            letter,
            status,
            position,
        }
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> LetterStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// Ordered outcomes for a whole guess, one per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterOutcome>);

impl Feedback {
    pub(crate) fn from_outcomes(outcomes: Vec<LetterOutcome>) -> Self {
        Self(outcomes)
    }

    #[must_use]
    pub fn outcomes(&self) -> &[LetterOutcome] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LetterOutcome> {
        self.0.iter()
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|o| o.status == LetterStatus::Correct)
    }

    /// Number of outcomes with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|o| o.status == status).count()
    }

    /// The guessed letters, in order
    #[must_use]
    pub fn letters(&self) -> String {
        self.0.iter().map(|o| o.letter).collect()
    }

    /// Tile symbols such as `"Y-YY-"`
    #[must_use]
    pub fn to_symbols(&self) -> String {
        self.0.iter().map(|o| o.status.symbol()).collect()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use guess_word::core::evaluate_str;
    ///
    /// let feedback = evaluate_str("crane", "slate").unwrap();
    /// assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|o| o.status.emoji()).collect()
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a LetterOutcome;
    type IntoIter = std::slice::Iter<'a, LetterOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
