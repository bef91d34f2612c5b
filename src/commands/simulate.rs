//! Simulate players - exercise the whole game flow
//!
//! Registers a batch of simulated players, has each of them try to play more
//! games per day than allowed, and collects the admin reports afterwards.

use crate::accounts::{conforming_password, conforming_username};
use crate::core::{Feedback, Word, evaluate};
use crate::game::Game;
use crate::service::{GameService, ServiceError, Session};
use crate::store::DailyReport;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub players: usize,
    pub days: usize,
    pub start_date: NaiveDate,
    /// Chance per turn that a player ignores earlier feedback.
    pub blunder_rate: f64,
    pub seed: u64,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(players: usize, days: usize, start_date: NaiveDate) -> Self {
        Self {
            players,
            days,
            start_date,
            blunder_rate: 0.3,
            seed: 42,
        }
    }
}

/// Aggregated outcome of a simulation
#[derive(Debug)]
pub struct SimulationSummary {
    pub players: usize,
    pub total_games: usize,
    pub games_won: usize,
    /// Game starts refused by the daily limit.
    pub limit_rejections: usize,
    /// Index `n` counts games won on guess `n`.
    pub guess_distribution: Vec<usize>,
    pub duration: Duration,
    pub daily_reports: Vec<DailyReport>,
}

impl SimulationSummary {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64
        }
    }
}

struct Job {
    session: Session,
    game: Game,
    seed: u64,
}

/// Run the simulation against `service`
///
/// Each player attempts one game more than the daily limit on every day.
/// Guess sequences are planned in parallel, then replayed through the service
/// so that every guess and result is stored.
///
/// # Errors
///
/// Returns an error if players cannot be registered or the service rejects
/// an operation other than the daily limit.
pub fn run_simulation(
    service: &mut GameService,
    config: &SimulationConfig,
) -> Result<SimulationSummary> {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(config.seed);

    let sessions = register_players(service, config.players)?;
    let attempts_per_day = service.config().max_daily_games + 1;
    let max_guesses = service.config().max_guesses_per_game;

    let mut jobs = Vec::new();
    let mut limit_rejections = 0;
    let mut dates = Vec::with_capacity(config.days);

    for day in 0..config.days {
        let date = config.start_date + chrono::Days::new(day as u64);
        dates.push(date);

        for session in &sessions {
            for _ in 0..attempts_per_day {
                match service.start_game(session, date, &mut rng) {
                    Ok(game) => jobs.push(Job {
                        session: session.clone(),
                        game,
                        seed: rng.random(),
                    }),
                    Err(ServiceError::DailyLimitReached(_)) => limit_rejections += 1,
                    Err(e) => return Err(e).context("starting simulated game"),
                }
            }
        }
    }

    println!("🎯 Simulating {} games...", jobs.len());

    let pb = ProgressBar::new(jobs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let words = service.store().words().to_vec();
    let plans: Vec<Vec<String>> = jobs
        .par_iter()
        .map(|job| {
            let plan = plan_guesses(&job.game, &words, max_guesses, config.blunder_rate, job.seed);
            pb.inc(1);
            plan
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut guess_distribution = vec![0; max_guesses + 1];
    let mut games_won = 0;

    for (mut job, plan) in jobs.into_iter().zip(plans) {
        for guess in &plan {
            let response = service
                .make_guess(&job.session, &mut job.game, guess)
                .context("replaying simulated guess")?;
            if response.is_won {
                games_won += 1;
                guess_distribution[response.total_guesses] += 1;
            }
        }
    }

    let admin = service.login(
        &service.config().admin_username,
        &service.config().admin_password,
    )?;
    let daily_reports = dates
        .iter()
        .map(|&date| service.daily_report(&admin, date))
        .collect::<Result<Vec<_>, _>>()?;

    let total_games = daily_reports.iter().map(|r| r.total_games).sum();
    info!(total_games, games_won, limit_rejections, "simulation finished");

    Ok(SimulationSummary {
        players: sessions.len(),
        total_games,
        games_won,
        limit_rejections,
        guess_distribution,
        duration: start.elapsed(),
        daily_reports,
    })
}

fn register_players(service: &mut GameService, count: usize) -> Result<Vec<Session>> {
    let password = conforming_password("sim", service.config());
    (0..count)
        .map(|i| {
            let username = conforming_username(&player_name(i), service.config());
            service
                .register(&username, &password, &password)
                .with_context(|| format!("registering {username}"))?;
            Ok(service.login(&username, &password)?)
        })
        .collect()
}

/// Alphabetic mixed-case names: Playera, Playerb, ..., Playerba, ...
fn player_name(index: usize) -> String {
    let mut suffix = Vec::new();
    let mut n = index;
    loop {
        suffix.push(b'a' + (n % 26) as u8);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    suffix.reverse();
    format!("Player{}", String::from_utf8_lossy(&suffix))
}

/// Probability accepted by `random_bool`; NaN counts as never
fn blunder_chance(rate: f64) -> f64 {
    if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) }
}

/// Play a copy of `game` to the end, returning the guesses made
///
/// Guesses are drawn from words consistent with all feedback so far, except
/// on blunder turns which pick any word.
fn plan_guesses(
    game: &Game,
    words: &[Word],
    max_guesses: usize,
    blunder_rate: f64,
    seed: u64,
) -> Vec<String> {
    let mut game = game.clone();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut history: Vec<(Word, Feedback)> = Vec::new();
    let mut guesses = Vec::new();

    while !game.is_completed() {
        let candidates: Vec<&Word> = words
            .iter()
            .filter(|w| {
                history
                    .iter()
                    .all(|(guess, feedback)| evaluate(guess, w).is_ok_and(|f| f == *feedback))
            })
            .collect();

        let pick = if rng.random_bool(blunder_chance(blunder_rate)) {
            words.choose(&mut rng)
        } else {
            candidates.choose(&mut rng).copied().or_else(|| words.choose(&mut rng))
        };
        let Some(guess) = pick else { break };

        match game.submit(guess.text(), max_guesses) {
            Ok(response) => {
                history.push((guess.clone(), response.feedback));
                guesses.push(guess.text().to_string());
            }
            Err(_) => break,
        }
    }

    guesses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::UserId;
    use crate::config::GameConfig;
    use crate::game::GameId;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    #[test]
    fn player_names_are_valid_usernames() {
        let config = GameConfig::default();
        assert_eq!(player_name(0), "Playera");
        assert_eq!(player_name(25), "Playerz");
        assert_eq!(player_name(26), "Playerba");
        for i in [0, 1, 27, 700] {
            assert!(crate::accounts::validate_username(&player_name(i), &config).is_ok());
        }
    }

    #[test]
    fn careful_player_always_solves_single_word_list() {
        let words = vec![Word::new("storm").unwrap()];
        let game = Game::new(GameId(1), UserId(1), words[0].clone(), date());
        let plan = plan_guesses(&game, &words, 5, 0.0, 9);
        assert_eq!(plan, ["STORM"]);
    }

    #[test]
    fn plan_never_exceeds_guess_limit() {
        let words: Vec<Word> = ["apple", "brave", "charm", "dance", "eagle", "faith"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let game = Game::new(GameId(1), UserId(1), words[5].clone(), date());
        for seed in 0..20 {
            let plan = plan_guesses(&game, &words, 3, 1.0, seed);
            assert!(!plan.is_empty() && plan.len() <= 3);
        }
    }

    #[test]
    fn simulation_respects_daily_limit_and_reports() {
        let mut service = GameService::new(GameConfig::default());
        let config = SimulationConfig {
            seed: 3,
            ..SimulationConfig::new(4, 2, date())
        };

        let summary = run_simulation(&mut service, &config).unwrap();

        assert_eq!(summary.players, 4);
        assert_eq!(summary.total_games, 4 * 2 * 3);
        assert_eq!(summary.limit_rejections, 4 * 2);
        assert_eq!(summary.daily_reports.len(), 2);
        for report in &summary.daily_reports {
            assert_eq!(report.total_users, 4);
            assert_eq!(report.total_games, 12);
        }
        let won_by_report: usize = summary.daily_reports.iter().map(|r| r.games_won).sum();
        assert_eq!(won_by_report, summary.games_won);
        assert_eq!(
            summary.guess_distribution.iter().sum::<usize>(),
            summary.games_won
        );
    }

    #[test]
    fn out_of_range_blunder_rates_are_tamed() {
        assert!(blunder_chance(f64::NAN).abs() < f64::EPSILON);
        assert!(blunder_chance(-0.5).abs() < f64::EPSILON);
        assert!((blunder_chance(f64::INFINITY) - 1.0).abs() < f64::EPSILON);

        let words = vec![Word::new("storm").unwrap()];
        let game = Game::new(GameId(1), UserId(1), words[0].clone(), date());
        assert_eq!(plan_guesses(&game, &words, 5, f64::NAN, 1), ["STORM"]);
    }

    #[test]
    fn simulation_follows_custom_account_rules() {
        let rules = GameConfig::from_toml_str(
            r##"
            required_special_chars = "#"
            min_username_length = 10
            min_password_length = 9
            "##,
        )
        .unwrap();
        let mut service = GameService::new(rules);
        let config = SimulationConfig {
            blunder_rate: f64::NAN,
            ..SimulationConfig::new(3, 1, date())
        };

        let summary = run_simulation(&mut service, &config).unwrap();

        assert_eq!(summary.players, 3);
        assert_eq!(summary.total_games, 3 * 3);
        assert!(service.store().find_user("xxxPlayera").is_some());
    }
}
