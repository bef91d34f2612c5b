//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile, e.g. ` S ` on yellow
#[must_use]
pub fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {letter} ").black().bold();
    match status {
        LetterStatus::Correct => text.on_green(),
        LetterStatus::WrongPosition => text.on_yellow(),
        LetterStatus::NotInWord => text.on_bright_black(),
    }
}

/// Render a whole guess as a row of colored tiles
#[must_use]
pub fn feedback_tiles(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|o| tile(o.letter(), o.status()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { value / max } else { 0.0 };
    // Cast is safe: values are clamped to [0, width]
    let filled = ((ratio.clamp(0.0, 1.0)) * width as f64) as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage with one decimal, e.g. `66.7%`
#[must_use]
pub fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
