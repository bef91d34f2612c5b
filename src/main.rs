//! Guess the Word - CLI
//!
//! Word-guessing game with a TUI, a line-mode app with accounts and admin
//! reports, a one-shot checker and a player simulation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guess_word::{
    commands::{SimulationConfig, check_guess, run_simple, run_simulation},
    config::GameConfig,
    output::{print_feedback, print_simulation_summary},
    service::GameService,
    wordlists::loader::load_from_file,
};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "guess_word",
    about = "Guess the hidden word: accounts, daily limits and admin reports",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML file with game rules (limits, word length, admin account, words)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Word list file, one word per line (overrides the configured words)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game as a guest player (default)
    Play,

    /// Line-mode app with registration, login, play and admin reports
    Simple,

    /// Evaluate one guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Simulate players and print the resulting reports
    Simulate {
        /// Number of simulated players
        #[arg(short = 'n', long, default_value = "10")]
        players: usize,

        /// Number of consecutive days, starting today
        #[arg(short, long, default_value = "3")]
        days: usize,

        /// Chance per turn that a player ignores earlier feedback
        #[arg(short, long, default_value = "0.3", value_parser = parse_probability)]
        blunder_rate: f64,

        /// Random seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// List the active target words
    Words,
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{s} is not between 0 and 1"))
    }
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration and words, then seed a fresh service
fn build_service(config_path: Option<&str>, wordlist: Option<&str>) -> Result<GameService> {
    let config = match config_path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {path}"))?,
        None => GameConfig::default(),
    };

    match wordlist {
        Some(path) => {
            let words = load_from_file(Path::new(path), config.word_length)
                .with_context(|| format!("reading word list {path}"))?;
            anyhow::ensure!(
                !words.is_empty(),
                "word list {path} has no {}-letter words",
                config.word_length
            );
            Ok(GameService::with_words(config, words))
        }
        None => Ok(GameService::new(config)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines would corrupt the full-screen UI
    init_logging(if matches!(command, Commands::Play) { "off" } else { "warn" });

    let mut service = build_service(cli.config.as_deref(), cli.wordlist.as_deref())?;
    let today = chrono::Local::now().date_naive();

    match command {
        Commands::Play => run_play_command(service, today),
        Commands::Simple => {
            let mut rng = rand::rng();
            let stdin = std::io::stdin();
            run_simple(&mut service, today, &mut rng, &mut stdin.lock())
        }
        Commands::Check { guess, target } => {
            run_check_command(&guess, &target, service.config().word_length)
        }
        Commands::Simulate {
            players,
            days,
            blunder_rate,
            seed,
        } => {
            let config = SimulationConfig {
                blunder_rate,
                seed,
                ..SimulationConfig::new(players, days, today)
            };
            let summary = run_simulation(&mut service, &config)?;
            print_simulation_summary(&summary);
            Ok(())
        }
        Commands::Words => {
            for word in service.store().words() {
                println!("{word}");
            }
            Ok(())
        }
    }
}

fn run_check_command(guess: &str, target: &str, word_length: usize) -> Result<()> {
    let result = check_guess(guess, target, word_length)?;

    println!("\n{} vs {}", result.guess, result.target);
    print_feedback(&result.feedback);
    if result.is_win() {
        println!("\n🎉 Exact match!");
    }
    Ok(())
}

fn run_play_command(service: GameService, today: chrono::NaiveDate) -> Result<()> {
    use guess_word::interactive::{App, run_tui};

    let app = App::new(service, today)?;
    run_tui(app)
}
