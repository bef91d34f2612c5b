//! Interactive TUI interface
//!
//! Full-screen game for a local guest player, built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, GUEST_USERNAME, InputMode, run_tui};
