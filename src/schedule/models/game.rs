use super::team::TeamId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a scheduled game. Records arriving without a status
/// default to `Scheduled` during normalization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

/// Canonical game record produced by the normalizer. Read-only input for a
/// single computation pass; never persisted or mutated by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub id: String,
    #[serde(rename = "homeTeamId")]
    pub home_team_id: TeamId,
    #[serde(rename = "awayTeamId")]
    pub away_team_id: TeamId,
    /// Calendar date of the game. No time-of-day guarantee; conflict rules
    /// operate on this field alone.
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(default)]
    pub status: GameStatus,
}

impl GameRecord {
    /// Whether the given team plays in this game, on either side.
    pub fn involves(&self, team_id: &str) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Whether this game shares a participant with another game.
    pub fn shares_participant(&self, other: &GameRecord) -> bool {
        other.involves(&self.home_team_id) || other.involves(&self.away_team_id)
    }
}
