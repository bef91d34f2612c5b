//! Guess evaluation
//!
//! Compares a guess against a target word and produces per-letter feedback,
//! handling duplicate letters so that each target letter is consumed at most once.

use super::feedback::{Feedback, LetterOutcome, LetterStatus};
use super::word::{Word, WordError};
use thiserror::Error;

/// Errors raised when a guess cannot be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error("Guess has {guess} letters but the target has {target}")]
    LengthMismatch { guess: usize, target: usize },

    #[error("Invalid input: {0}")]
    InvalidWord(#[from] WordError),
}

/// Evaluate `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark exact matches as `Correct` and remove those letters
///    from the target's pool
/// 2. Second pass: for every other position, mark `WrongPosition` if the letter
///    is still in the pool (consuming its first remaining occurrence), else
///    `NotInWord`
///
/// # Errors
/// Returns `EvaluateError::LengthMismatch` when the words differ in length.
///
/// # Examples
/// ```
/// use guess_word::core::{LetterStatus, Word, evaluate};
///
/// let guess = Word::new("speed").unwrap();
/// let target = Word::new("erase").unwrap();
/// let feedback = evaluate(&guess, &target).unwrap();
///
/// let statuses: Vec<_> = feedback.iter().map(|o| o.status()).collect();
/// assert_eq!(statuses, [
///     LetterStatus::WrongPosition,
///     LetterStatus::NotInWord,
///     LetterStatus::WrongPosition,
///     LetterStatus::WrongPosition,
///     LetterStatus::NotInWord,
/// ]);
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> Result<Feedback, EvaluateError> {
    if guess.len() != target.len() {
        return Err(EvaluateError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let guess_letters = guess.chars();
    let mut pool: Vec<Option<u8>> = target.chars().iter().copied().map(Some).collect();
    let mut statuses: Vec<Option<LetterStatus>> = vec![None; guess_letters.len()];

    // First pass: exact matches
    for (i, &letter) in guess_letters.iter().enumerate() {
        if pool[i] == Some(letter) {
            statuses[i] = Some(LetterStatus::Correct);
            pool[i] = None;
        }
    }

    // Second pass: remaining positions against the unmatched pool
    for (i, &letter) in guess_letters.iter().enumerate() {
        if statuses[i].is_some() {
            continue;
        }

        statuses[i] = Some(match pool.iter().position(|&slot| slot == Some(letter)) {
            Some(j) => {
                pool[j] = None;
                LetterStatus::WrongPosition
            }
            None => LetterStatus::NotInWord,
        });
    }

    let outcomes = guess_letters
        .iter()
        .zip(statuses)
        .enumerate()
        .map(|(i, (&letter, status))| {
            LetterOutcome::new(
                char::from(letter),
                status.unwrap_or(LetterStatus::NotInWord),
                i,
            )
        })
        .collect();

    Ok(Feedback::from_outcomes(outcomes))
}

/// Evaluate raw strings, normalizing both to uppercase first
///
/// # Errors
/// Returns `EvaluateError::InvalidWord` if either string is empty or not
/// alphabetic, and `EvaluateError::LengthMismatch` if their lengths differ.
pub fn evaluate_str(guess: &str, target: &str) -> Result<Feedback, EvaluateError> {
    let guess = Word::with_length(guess, guess.len())?;
    let target = Word::with_length(target, target.len())?;
    if guess.is_empty() {
        return Err(EvaluateError::InvalidWord(WordError::InvalidLength {
            expected: target.len(),
            actual: 0,
        }));
    }
    evaluate(&guess, &target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rustc_hash::FxHashMap;
    use crate::core::LetterStatus::{Correct, NotInWord, WrongPosition};

    fn statuses(guess: &str, target: &str) -> Vec<LetterStatus> {
        evaluate_str(guess, target)
            .unwrap()
            .iter()
            .map(LetterOutcome::status)
            .collect()
    }

    #[test]
    fn identical_words_are_all_correct() {
        for word in ["APPLE", "crane", "aaaaa", "Zebra"] {
            let fb = evaluate_str(word, word).unwrap();
            assert!(fb.is_win(), "{word} against itself should win");
        }
    }

    #[test]
    fn no_shared_letters_are_all_absent() {
        assert_eq!(statuses("ABCDE", "FGHIJ"), [NotInWord; 5]);
    }

    #[test]
    fn speed_against_erase() {
        assert_eq!(
            statuses("SPEED", "ERASE"),
            [WrongPosition, NotInWord, WrongPosition, WrongPosition, NotInWord]
        );
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_duplicate() {
        // ROBOT vs FLOOR: the second O is exact, the first O takes the other O
        assert_eq!(
            statuses("ROBOT", "FLOOR"),
            [WrongPosition, WrongPosition, NotInWord, Correct, NotInWord]
        );
    }

    #[test]
    fn duplicate_guess_letter_limited_by_target_count() {
        // APPLE vs ALLOY: only one A and one L in the target
        assert_eq!(
            statuses("APPLE", "ALLOY"),
            [Correct, NotInWord, NotInWord, WrongPosition, NotInWord]
        );

        // EERIE has three E's, THEME only two, one of them exact
        assert_eq!(
            statuses("EERIE", "THEME"),
            [WrongPosition, NotInWord, NotInWord, NotInWord, Correct]
        );
    }

    #[test]
    fn exact_match_consumes_the_only_occurrence() {
        // LLAMA vs HELLO: no exact matches, both guessed L's find a target L
        assert_eq!(
            statuses("LLAMA", "HELLO"),
            [WrongPosition, WrongPosition, NotInWord, NotInWord, NotInWord]
        );
        // The target has one E, taken by the exact match at position 4
        assert_eq!(
            statuses("GEESE", "THOSE"),
            [NotInWord, NotInWord, NotInWord, Correct, Correct]
        );
    }

    #[test]
    fn swapped_letters_give_one_wrong_position_pair() {
        let fb = evaluate_str("HAERT", "HEART").unwrap();
        assert_eq!(fb.count(Correct), 3);
        assert_eq!(fb.count(WrongPosition), 2);
        assert_eq!(fb.count(NotInWord), 0);
        assert_eq!(
            fb.iter().map(LetterOutcome::status).collect::<Vec<_>>(),
            [Correct, WrongPosition, WrongPosition, Correct, Correct]
        );
    }

    #[test]
    fn input_case_is_irrelevant() {
        assert_eq!(
            evaluate_str("speed", "erase"),
            evaluate_str("SPEED", "ErAsE")
        );
        let fb = evaluate_str("speed", "erase").unwrap();
        assert_eq!(fb.letters(), "SPEED");
    }

    #[test]
    fn positions_are_sequential() {
        let fb = evaluate_str("CRANE", "SLATE").unwrap();
        for (i, outcome) in fb.iter().enumerate() {
            assert_eq!(outcome.position(), i);
        }
    }

    #[test]
    fn length_mismatch_is_rejected() {
        assert_eq!(
            evaluate_str("CRANES", "CRANE"),
            Err(EvaluateError::LengthMismatch {
                guess: 6,
                target: 5
            })
        );

        let guess = Word::with_length("CAT", 3).unwrap();
        let target = Word::new("CATCH").unwrap();
        assert!(matches!(
            evaluate(&guess, &target),
            Err(EvaluateError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn invalid_input_is_rejected() {
        assert!(matches!(
            evaluate_str("", "CRANE"),
            Err(EvaluateError::InvalidWord(_))
        ));
        assert!(matches!(
            evaluate_str("CR4NE", "CRANE"),
            Err(EvaluateError::InvalidWord(WordError::InvalidCharacters))
        ));
    }

    #[test]
    fn other_word_lengths_are_supported() {
        assert_eq!(
            statuses("LETTER", "BETTER"),
            [NotInWord, Correct, Correct, Correct, Correct, Correct]
        );
    }

    proptest! {
        #[test]
        fn prop_self_evaluation_is_win(word in "[A-Z]{5}") {
            let fb = evaluate_str(&word, &word).unwrap();
            prop_assert!(fb.is_win());
        }

        #[test]
        fn prop_letters_follow_guess(guess in "[A-Z]{5}", target in "[A-Z]{5}") {
            let fb = evaluate_str(&guess, &target).unwrap();
            prop_assert_eq!(fb.len(), 5);
            for (outcome, expected) in fb.iter().zip(guess.chars()) {
                prop_assert_eq!(outcome.letter(), expected);
            }
        }

        #[test]
        fn prop_matches_never_exceed_target_count(guess in "[A-F]{5}", target in "[A-F]{5}") {
            let fb = evaluate_str(&guess, &target).unwrap();
            let target_word = Word::new(target.as_str()).unwrap();
            let available = target_word.char_counts();

            let mut matched: FxHashMap<char, usize> = FxHashMap::default();
            for outcome in fb.iter().filter(|o| o.status().is_match()) {
                *matched.entry(outcome.letter()).or_insert(0) += 1;
            }

            for (letter, count) in matched {
                let in_target = available.get(&(letter as u8)).copied().unwrap_or(0);
                prop_assert!(count <= in_target, "{letter}: {count} > {in_target}");
            }
        }

        #[test]
        fn prop_correct_iff_same_letter(guess in "[A-D]{5}", target in "[A-D]{5}") {
            let fb = evaluate_str(&guess, &target).unwrap();
            for ((outcome, g), t) in fb.iter().zip(guess.chars()).zip(target.chars()) {
                prop_assert_eq!(outcome.status() == Correct, g == t);
            }
        }

        #[test]
        fn prop_evaluation_is_deterministic(guess in "[a-zA-Z]{5}", target in "[a-zA-Z]{5}") {
            prop_assert_eq!(evaluate_str(&guess, &target), evaluate_str(&guess, &target));
        }
    }
}
