//! Display functions for CLI output

use super::formatters::{create_progress_bar, feedback_tiles, percent};
use crate::commands::SimulationSummary;
use crate::core::{Feedback, LetterStatus};
use crate::game::GuessResponse;
use crate::store::{DailyReport, UserReportRow};
use colored::Colorize;

/// Print one evaluated guess with its tiles and emoji row
pub fn print_feedback(feedback: &Feedback) {
    println!("   {}   {}", feedback_tiles(feedback), feedback.to_emoji());
    println!(
        "   {} correct, {} wrong position, {} not in word",
        feedback.count(LetterStatus::Correct).to_string().green(),
        feedback.count(LetterStatus::WrongPosition).to_string().yellow(),
        feedback.count(LetterStatus::NotInWord).to_string().bright_black()
    );
}

/// Print the result of a guess made during a game
pub fn print_guess_response(response: &GuessResponse) {
    println!(
        "\n   {}. {}",
        response.total_guesses.to_string().bright_black(),
        feedback_tiles(&response.feedback)
    );

    if response.is_won {
        println!(
            "\n{}",
            format!(
                "🎉 Correct! Solved in {} {}",
                response.total_guesses,
                if response.total_guesses == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        );
    } else if response.is_completed {
        println!(
            "\n{} The word was {}",
            "❌ Out of guesses!".red().bold(),
            response
                .target_word
                .as_deref()
                .unwrap_or_default()
                .bright_yellow()
                .bold()
        );
    } else {
        println!("   {} guesses left", response.guesses_left);
    }
}

/// Print the admin daily report
pub fn print_daily_report(report: &DailyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "DAILY REPORT:".bright_cyan().bold(),
        report.date.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Players:          {}", report.total_users);
    println!("   Games played:     {}", report.total_games);
    println!(
        "   Words guessed:    {}",
        report.games_won.to_string().green().bold()
    );
    println!(
        "   Win rate:         [{}] {}",
        create_progress_bar(report.win_rate(), 1.0, 30).green(),
        percent(report.win_rate()).bright_yellow()
    );
}

/// Print the admin per-user report
pub fn print_user_report(username: &str, rows: &[UserReportRow]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "USER REPORT:".bright_cyan().bold(),
        username.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if rows.is_empty() {
        println!("\n   No games played yet.");
        return;
    }

    println!(
        "\n   {:<12} {:>12} {:>16}",
        "Date".bold(),
        "Words tried".bold(),
        "Correct guesses".bold()
    );
    for row in rows {
        println!(
            "   {:<12} {:>12} {:>16}",
            row.date.to_string(),
            row.words_tried,
            row.correct_guesses.to_string().green()
        );
    }
}

/// Print the outcome of a simulation run
pub fn print_simulation_summary(summary: &SimulationSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Players:          {}", summary.players);
    println!("   Games played:     {}", summary.total_games);
    println!(
        "   Games won:        {} ({})",
        summary.games_won.to_string().green().bold(),
        percent(summary.win_rate()).bright_yellow()
    );
    println!(
        "   Turned away:      {}",
        summary.limit_rejections.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", summary.duration.as_secs_f64());

    if summary.games_won > 0 {
        println!("\n📈 {}", "Guesses to win:".bright_cyan().bold());
        for (guess_count, &count) in summary.guess_distribution.iter().enumerate().skip(1) {
            if count == 0 {
                continue;
            }
            let pct = count as f64 / summary.games_won as f64;
            let bar = create_progress_bar(pct, 1.0, 40);
            println!(
                "   {guess_count}: {} {count:4} ({:>6})",
                bar.green(),
                percent(pct)
            );
        }
    }

    for report in &summary.daily_reports {
        print_daily_report(report);
    }
}
