use crate::matrix::conflict::{ConflictLevel, classify_games};
use crate::schedule::models::{GameRecord, TeamId};
use std::fmt;

/// Unordered team-pair key. `new(a, b)` and `new(b, a)` produce the same
/// key, so a cell for (A,B) and (B,A) is the same cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    first: TeamId,
    second: TeamId,
}

impl PairKey {
    pub fn new(a: impl Into<TeamId>, b: impl Into<TeamId>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            PairKey { first: a, second: b }
        } else {
            PairKey { first: b, second: a }
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// Whether a game belongs to this pair, in either home/away orientation.
    pub fn matches(&self, game: &GameRecord) -> bool {
        (game.home_team_id == self.first && game.away_team_id == self.second)
            || (game.home_team_id == self.second && game.away_team_id == self.first)
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.first, self.second)
    }
}

/// One cell of the matchup matrix: every game between one unordered team
/// pair, in input order. Cells are never mutated in place; a rebuild
/// produces fresh ones.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixCell {
    pub key: PairKey,
    pub games: Vec<GameRecord>,
}

impl MatrixCell {
    pub fn empty(key: PairKey) -> Self {
        MatrixCell {
            key,
            games: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Conflict level of this cell, recomputed from the game list on every
    /// call so it can never go stale.
    pub fn conflict_level(&self) -> ConflictLevel {
        classify_games(&self.games)
    }
}
