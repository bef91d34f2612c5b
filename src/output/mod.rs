//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_daily_report, print_feedback, print_guess_response, print_simulation_summary,
    print_user_report,
};
