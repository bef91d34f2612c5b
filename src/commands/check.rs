//! Check command
//!
//! Evaluates a single guess against a given target word.

use crate::core::{EvaluateError, Feedback, Word, evaluate};

/// Result of checking one guess
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

impl CheckResult {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.feedback.is_win()
    }
}

/// Evaluate `guess` against `target`, both of `word_length` letters
///
/// # Errors
///
/// Returns an error if either word is malformed or the lengths differ.
pub fn check_guess(
    guess: &str,
    target: &str,
    word_length: usize,
) -> Result<CheckResult, EvaluateError> {
    let guess = Word::with_length(guess.trim(), word_length)?;
    let target = Word::with_length(target.trim(), word_length)?;
    let feedback = evaluate(&guess, &target)?;

    Ok(CheckResult {
        guess,
        target,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    #[test]
    fn check_reports_feedback() {
        let result = check_guess("speed", "ERASE", 5).unwrap();
        assert_eq!(result.guess.text(), "SPEED");
        assert_eq!(result.target.text(), "ERASE");
        assert_eq!(result.feedback.to_symbols(), "Y-YY-");
        assert!(!result.is_win());
    }

    #[test]
    fn check_win() {
        assert!(check_guess(" magic ", "MAGIC", 5).unwrap().is_win());
    }

    #[test]
    fn check_rejects_wrong_length() {
        assert!(matches!(
            check_guess("magical", "magic", 5),
            Err(EvaluateError::InvalidWord(WordError::InvalidLength {
                expected: 5,
                actual: 7
            }))
        ));
    }
}
