//! Word lists for the game
//!
//! Provides the embedded seed list compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{INITIAL_WORDS, INITIAL_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_const() {
        assert_eq!(INITIAL_WORDS.len(), INITIAL_WORDS_COUNT);
    }

    #[test]
    fn initial_words_are_valid() {
        for &word in INITIAL_WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn initial_words_are_unique() {
        let unique: std::collections::HashSet<_> = INITIAL_WORDS.iter().collect();
        assert_eq!(unique.len(), INITIAL_WORDS.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(INITIAL_WORDS_COUNT, 20, "Expected 20 seed words");
    }
}
