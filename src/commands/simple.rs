//! Simple interactive CLI mode
//!
//! Text-based version of the full application: accounts, dashboard, play and
//! admin reports, driven by line input.

use crate::output::{print_daily_report, print_guess_response, print_user_report};
use crate::service::{Dashboard, GameService, Session};
use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
/// End of input is treated as 'quit' at every prompt.
pub fn run_simple<R: Rng + ?Sized>(
    service: &mut GameService,
    today: NaiveDate,
    rng: &mut R,
    input: &mut impl BufRead,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Guess the Word                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} tries. {} games per day.",
        service.config().word_length,
        service.config().max_guesses_per_game,
        service.config().max_daily_games
    );
    println!("Commands: 'r' register, 'l' login, 'q' quit\n");

    loop {
        match prompt(input, "Command")?.to_lowercase().as_str() {
            "r" | "register" => register(service, input)?,
            "l" | "login" => {
                if let Some(session) = login(service, input)? {
                    if session.is_admin() {
                        admin_menu(service, &session, today, input)?;
                    } else {
                        player_menu(service, &session, today, rng, input)?;
                    }
                    println!("\n👋 Goodbye, {}!\n", session.username);
                }
            }
            "q" | "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "" => {}
            _ => println!("❌ Unknown command. Use 'r', 'l' or 'q'.\n"),
        }
    }
}

fn register(service: &mut GameService, input: &mut impl BufRead) -> Result<()> {
    let username = prompt(input, "Username")?;
    let password = prompt(input, "Password")?;
    let confirm = prompt(input, "Confirm password")?;

    match service.register(&username, &password, &confirm) {
        Ok(_) => println!("{}\n", "✓ Registration successful! Please login.".green()),
        Err(e) => println!("{} {e}\n", "❌ Registration failed:".red()),
    }
    Ok(())
}

fn login(service: &GameService, input: &mut impl BufRead) -> Result<Option<Session>> {
    let username = prompt(input, "Username")?;
    let password = prompt(input, "Password")?;

    match service.login(&username, &password) {
        Ok(session) => {
            println!(
                "{}\n",
                format!("✓ Welcome back, {}!", session.username).green()
            );
            Ok(Some(session))
        }
        Err(e) => {
            println!("❌ {e}\n");
            Ok(None)
        }
    }
}

fn player_menu<R: Rng + ?Sized>(
    service: &mut GameService,
    session: &Session,
    today: NaiveDate,
    rng: &mut R,
    input: &mut impl BufRead,
) -> Result<()> {
    loop {
        if let Dashboard::Player {
            games_today,
            can_play,
            max_games,
        } = service.dashboard(session, today)
        {
            println!("────────────────────────────────────────────────────────────");
            println!("Games today: {games_today}/{max_games}");
            if !can_play {
                println!("{}", "Daily limit reached. Come back tomorrow!".yellow());
            }
            println!("────────────────────────────────────────────────────────────");
        }

        match prompt(input, "Command ('p' play, 'o' logout)")?
            .to_lowercase()
            .as_str()
        {
            "p" | "play" => play_game(service, session, today, rng, input)?,
            "o" | "logout" | "q" | "quit" => return Ok(()),
            _ => println!("❌ Unknown command.\n"),
        }
    }
}

fn play_game<R: Rng + ?Sized>(
    service: &mut GameService,
    session: &Session,
    today: NaiveDate,
    rng: &mut R,
    input: &mut impl BufRead,
) -> Result<()> {
    let mut game = match service.start_game(session, today, rng) {
        Ok(game) => game,
        Err(e) => {
            println!("❌ {e}\n");
            return Ok(());
        }
    };

    println!(
        "\n🔤 New game! Guess the {}-letter word. Type 'quit' to give up.\n",
        game.word_length()
    );

    while !game.is_completed() {
        let guess = prompt(input, "Guess")?;
        if matches!(guess.to_lowercase().as_str(), "quit" | "q") {
            println!("Game abandoned.\n");
            return Ok(());
        }

        match service.make_guess(session, &mut game, &guess) {
            Ok(response) => print_guess_response(&response),
            Err(e) => println!("❌ {e}"),
        }
    }

    println!();
    Ok(())
}

fn admin_menu(
    service: &GameService,
    session: &Session,
    today: NaiveDate,
    input: &mut impl BufRead,
) -> Result<()> {
    loop {
        match prompt(input, "Command ('d' daily report, 'u' user report, 'o' logout)")?
            .to_lowercase()
            .as_str()
        {
            "d" | "daily" => {
                let raw = prompt(input, &format!("Date [{today}]"))?;
                let date = if raw.is_empty() {
                    today
                } else if let Ok(date) = raw.parse::<NaiveDate>() {
                    date
                } else {
                    println!("❌ Use YYYY-MM-DD\n");
                    continue;
                };
                print_daily_report(&service.daily_report(session, date)?);
                println!();
            }
            "u" | "user" => {
                let players = service.players(session)?;
                if players.is_empty() {
                    println!("No players registered.\n");
                    continue;
                }
                println!("Players: {}", players.join(", "));
                let username = prompt(input, "Username")?;
                match service.user_report(session, &username) {
                    Ok(rows) => print_user_report(&username, &rows),
                    Err(e) => println!("❌ {e}"),
                }
                println!();
            }
            "o" | "logout" | "q" | "quit" => return Ok(()),
            _ => println!("❌ Unknown command.\n"),
        }
    }
}

/// Get user input with a prompt; end of input reads as "quit"
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(line.trim().to_string())
}
