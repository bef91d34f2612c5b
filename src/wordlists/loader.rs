//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of the given length from a file, one per line
///
/// Blank lines, `#` comments and entries that are not valid words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use guess_word::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::with_length(trimmed, length).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert a string slice to words of the given length, skipping invalid entries
///
/// # Examples
/// ```
/// use guess_word::wordlists::loader::words_from_slice;
/// use guess_word::wordlists::INITIAL_WORDS;
///
/// let words = words_from_slice(INITIAL_WORDS, 5);
/// assert_eq!(words.len(), INITIAL_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S], length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|s| Word::with_length(s.as_ref(), length).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"], 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_other_length() {
        let words = words_from_slice(&["planet", "crane"], 6);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "PLANET");
    }

    #[test]
    fn load_from_file_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# seed words").unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  brave  ").unwrap();
        writeln!(file, "nope").unwrap();

        let words = load_from_file(file.path(), 5).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "APPLE");
        assert_eq!(words[1].text(), "BRAVE");
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here.txt", 5).is_err());
    }
}
