use crate::schedule::models::{GameRecord, Team, TeamId};
use chrono::Datelike;
use std::collections::BTreeMap;
use tracing::debug;

/// Gap of one calendar day or fewer counts as back-to-back.
pub const BACK_TO_BACK_MAX_GAP_DAYS: i64 = 1;

/// Per-team scheduling load, derived from the filtered game list.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamLoad {
    pub home_games: usize,
    pub away_games: usize,
    /// `min(home, away) / max(home, away)`. 1.0 is perfectly balanced;
    /// 1.0 when both counts are zero, 0.0 when exactly one side is zero.
    pub balance: f64,
    /// Calendar-day gaps between consecutive games, chronological order.
    pub rest_days: Vec<i64>,
    /// Number of gaps at or under [`BACK_TO_BACK_MAX_GAP_DAYS`].
    pub back_to_back_count: usize,
}

impl TeamLoad {
    pub fn total_games(&self) -> usize {
        self.home_games + self.away_games
    }
}

/// Aggregate load and balance statistics over a filtered game list.
/// Derived, recomputed per call; nothing here is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleStatistics {
    /// One entry per roster team, including teams with no games.
    pub team_loads: BTreeMap<TeamId, TeamLoad>,
    /// Games per ISO week (`YYYY-Www` keys). Sparse: weeks without games
    /// in range get no entry.
    pub weekly_density: BTreeMap<String, usize>,
}

impl ScheduleStatistics {
    /// Computes all statistics for the given games and roster.
    pub fn compute(games: &[GameRecord], teams: &[Team]) -> Self {
        let mut team_loads = BTreeMap::new();
        for team in teams {
            team_loads.insert(team.id.clone(), compute_team_load(&team.id, games));
        }

        let mut weekly_density: BTreeMap<String, usize> = BTreeMap::new();
        for game in games {
            *weekly_density.entry(iso_week_key(game)).or_insert(0) += 1;
        }

        debug!(
            "Computed statistics: {} teams, {} games, {} active weeks",
            teams.len(),
            games.len(),
            weekly_density.len()
        );

        ScheduleStatistics {
            team_loads,
            weekly_density,
        }
    }

    /// Total back-to-back gaps across all teams.
    pub fn total_back_to_backs(&self) -> usize {
        self.team_loads.values().map(|l| l.back_to_back_count).sum()
    }
}

fn compute_team_load(team_id: &str, games: &[GameRecord]) -> TeamLoad {
    let home_games = games.iter().filter(|g| g.home_team_id == team_id).count();
    let away_games = games.iter().filter(|g| g.away_team_id == team_id).count();

    let mut own_games: Vec<&GameRecord> = games.iter().filter(|g| g.involves(team_id)).collect();
    own_games.sort_by_key(|g| (g.date, g.time));

    let rest_days: Vec<i64> = own_games
        .windows(2)
        .map(|pair| (pair[1].date - pair[0].date).num_days())
        .collect();
    let back_to_back_count = rest_days
        .iter()
        .filter(|gap| **gap <= BACK_TO_BACK_MAX_GAP_DAYS)
        .count();

    TeamLoad {
        home_games,
        away_games,
        balance: home_away_balance(home_games, away_games),
        rest_days,
        back_to_back_count,
    }
}

/// Home/away balance with the division-by-zero guards: 1.0 when both
/// counts are zero, 0.0 when exactly one side is zero.
fn home_away_balance(home: usize, away: usize) -> f64 {
    let (min, max) = (home.min(away), home.max(away));
    if max == 0 {
        return 1.0;
    }
    min as f64 / max as f64
}

/// Sparse ISO-week bucket key for a game, e.g. `2024-W36`. Uses the ISO
/// week-year, which can differ from the calendar year at year boundaries.
fn iso_week_key(game: &GameRecord) -> String {
    let week = game.date.iso_week();
    format!("{:04}-W{:02}", week.year(), week.week())
}
