//! Core domain types for the word game
//!
//! This module contains the words, the guess evaluator and its feedback types.
//! Everything here is pure: no I/O, no shared state.

mod evaluate;
mod feedback;
mod word;

pub use evaluate::{EvaluateError, evaluate, evaluate_str};
pub use feedback::{Feedback, LetterOutcome, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
