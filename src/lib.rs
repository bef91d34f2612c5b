//! Guess the Word
//!
//! A word-guessing game with player accounts, a daily play limit and admin
//! reports. At its heart is a duplicate-safe guess evaluator.
//!
//! # Quick Start
//!
//! ```rust
//! use guess_word::core::{LetterStatus, Word, evaluate};
//!
//! let guess = Word::new("robot").unwrap();
//! let target = Word::new("floor").unwrap();
//!
//! let feedback = evaluate(&guess, &target).unwrap();
//! assert_eq!(feedback.to_symbols(), "YY-G-");
//! assert_eq!(feedback.outcomes()[3].status(), LetterStatus::Correct);
//! ```

// Core domain types
pub mod core;

// Game rules and account settings
pub mod config;

// Accounts, single games, storage and the application flows
pub mod accounts;
pub mod game;
pub mod service;
pub mod store;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
