//! Admin report aggregation over stored game rows

use super::GameRow;
use crate::accounts::UserId;
use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Activity across all players on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyReport {
    pub date: NaiveDate,
    /// Distinct players who started a game.
    pub total_users: usize,
    pub total_games: usize,
    /// Games won, i.e. words guessed correctly.
    pub games_won: usize,
}

impl DailyReport {
    /// Share of games won, 0.0 when nobody played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64
        }
    }
}

/// One player's activity on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserReportRow {
    pub date: NaiveDate,
    pub words_tried: usize,
    pub correct_guesses: usize,
}

pub(super) fn daily_report(games: &[GameRow], date: NaiveDate) -> DailyReport {
    let mut users = FxHashSet::default();
    let mut report = DailyReport {
        date,
        total_users: 0,
        total_games: 0,
        games_won: 0,
    };

    for game in games.iter().filter(|g| g.date == date) {
        users.insert(game.user_id);
        report.total_games += 1;
        if game.won {
            report.games_won += 1;
        }
    }

    report.total_users = users.len();
    report
}

/// Rows grouped by date, newest first
pub(super) fn user_report(games: &[GameRow], user_id: UserId) -> Vec<UserReportRow> {
    let mut by_date: BTreeMap<NaiveDate, (usize, usize)> = BTreeMap::new();

    for game in games.iter().filter(|g| g.user_id == user_id) {
        let entry = by_date.entry(game.date).or_default();
        entry.0 += 1;
        if game.won {
            entry.1 += 1;
        }
    }

    by_date
        .into_iter()
        .rev()
        .map(|(date, (words_tried, correct_guesses))| UserReportRow {
            date,
            words_tried,
            correct_guesses,
        })
        .collect()
}
