pub mod cell;
pub mod conflict;

pub use cell::{MatrixCell, PairKey};
pub use conflict::{ConflictLevel, classify_games};

use crate::error::AppError;
use crate::schedule::models::{GameRecord, Team, TeamId};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// A team booked into more than one game on one calendar date, found by
/// scanning the whole filtered game set rather than a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCollision {
    pub team_id: TeamId,
    pub date: NaiveDate,
    pub game_ids: Vec<String>,
}

/// The team-by-team matchup matrix: one cell per unordered team pair,
/// empty pairs included, so consumers can render "no games" without
/// special-casing.
///
/// A matrix is a pure function of its `(games, teams, filter)` inputs.
/// Filtering rebuilds a fully independent matrix from the retained game
/// list; nothing is shared or lazily computed.
#[derive(Debug, Clone)]
pub struct Matrix {
    teams: Vec<Team>,
    roster_ids: HashSet<TeamId>,
    games: Vec<GameRecord>,
    cells: BTreeMap<PairKey, MatrixCell>,
}

impl Matrix {
    /// Builds the matrix from normalized games and the full roster.
    ///
    /// For `n` teams the result has exactly `n*(n-1)/2` cells. Per-cell
    /// game order is input order; the builder defines no ordering
    /// guarantee beyond stability, so callers needing chronological order
    /// sort explicitly.
    pub fn build(games: &[GameRecord], teams: &[Team]) -> Self {
        Self::build_filtered(games, teams, |_| true)
    }

    /// Builds the matrix from the subset of games accepted by `filter`.
    /// The result is fully independent of any previously built matrix.
    pub fn build_filtered<F>(games: &[GameRecord], teams: &[Team], filter: F) -> Self
    where
        F: Fn(&GameRecord) -> bool,
    {
        let roster_ids: HashSet<TeamId> = teams.iter().map(|t| t.id.clone()).collect();

        let mut cells: BTreeMap<PairKey, MatrixCell> = BTreeMap::new();
        for (i, a) in teams.iter().enumerate() {
            for b in &teams[i + 1..] {
                let key = PairKey::new(a.id.clone(), b.id.clone());
                cells.insert(key.clone(), MatrixCell::empty(key));
            }
        }

        let mut kept: Vec<GameRecord> = Vec::new();
        for game in games {
            if !filter(game) {
                continue;
            }
            if !roster_ids.contains(&game.home_team_id) || !roster_ids.contains(&game.away_team_id)
            {
                warn!(
                    "Skipping game '{}': participant outside the roster ({} vs {})",
                    game.id, game.home_team_id, game.away_team_id
                );
                continue;
            }
            let key = PairKey::new(game.home_team_id.clone(), game.away_team_id.clone());
            if let Some(cell) = cells.get_mut(&key) {
                cell.games.push(game.clone());
            }
            kept.push(game.clone());
        }

        debug!(
            "Built matrix: {} teams, {} cells, {} games in scope",
            teams.len(),
            cells.len(),
            kept.len()
        );

        Matrix {
            teams: teams.to_vec(),
            roster_ids,
            games: kept,
            cells,
        }
    }

    /// Looks up the cell for an unordered team pair.
    ///
    /// # Returns
    /// * `Ok(&MatrixCell)` - The cell, identical for (A,B) and (B,A)
    /// * `Err(AppError::UnknownTeam)` - Either id is outside the roster
    ///   this matrix was built from (a caller contract violation)
    /// * `Err(AppError::SelfMatch)` - Both ids name the same team; the
    ///   matrix has no self-pairs
    pub fn get_cell(&self, team_a: &str, team_b: &str) -> Result<&MatrixCell, AppError> {
        for id in [team_a, team_b] {
            if !self.roster_ids.contains(id) {
                return Err(AppError::unknown_team(id));
            }
        }
        if team_a == team_b {
            return Err(AppError::self_match(team_a));
        }
        let key = PairKey::new(team_a, team_b);
        self.cells
            .get(&key)
            .ok_or_else(|| AppError::unknown_team(team_a))
    }

    /// Rebuilds the matrix scoped to one sport tag. Games without a sport
    /// tag are excluded.
    pub fn filter_by_sport(&self, sport: &str) -> Matrix {
        Matrix::build_filtered(&self.games, &self.teams, |g| {
            g.sport.as_deref() == Some(sport)
        })
    }

    /// Rebuilds the matrix scoped to an inclusive date range.
    ///
    /// # Returns
    /// * `Err(AppError::InvalidRange)` - `start` is after `end`; the call
    ///   fails, nothing else is affected
    pub fn filter_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Matrix, AppError> {
        if start > end {
            return Err(AppError::invalid_range(start, end));
        }
        Ok(Matrix::build_filtered(&self.games, &self.teams, |g| {
            g.date >= start && g.date <= end
        }))
    }

    /// Cells whose conflict level is [`ConflictLevel::Conflict`], in key
    /// order.
    pub fn conflicts(&self) -> Vec<&MatrixCell> {
        self.cells
            .values()
            .filter(|cell| cell.conflict_level() == ConflictLevel::Conflict)
            .collect()
    }

    /// Scans the whole filtered game set for teams booked into more than
    /// one game on one calendar date. This catches double-bookings that
    /// never meet inside a single cell, e.g. a team hosting two different
    /// opponents the same day.
    pub fn team_day_collisions(&self) -> Vec<DayCollision> {
        let mut per_team_day: BTreeMap<(TeamId, NaiveDate), Vec<String>> = BTreeMap::new();
        for game in &self.games {
            for id in [&game.home_team_id, &game.away_team_id] {
                per_team_day
                    .entry((id.clone(), game.date))
                    .or_default()
                    .push(game.id.clone());
            }
        }

        per_team_day
            .into_iter()
            .filter(|(_, game_ids)| game_ids.len() > 1)
            .map(|((team_id, date), game_ids)| DayCollision {
                team_id,
                date,
                game_ids,
            })
            .collect()
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// The filter-scoped game list this matrix was built from.
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    /// Cells in key order.
    pub fn cells(&self) -> impl Iterator<Item = &MatrixCell> {
        self.cells.values()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
