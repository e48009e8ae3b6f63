use serde::Deserialize;

/// Loosely-shaped game record as the scheduling backend exports it.
///
/// The backend's response shape has drifted over time, so the same field
/// may arrive under several names. The serde aliases here absorb that
/// variance at the boundary; everything past the normalizer works with
/// [`GameRecord`](super::game::GameRecord) only.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawGame {
    #[serde(default, alias = "gameId", alias = "game_id")]
    pub id: Option<String>,
    #[serde(
        default,
        alias = "homeTeamId",
        alias = "home_team",
        alias = "homeTeam",
        alias = "home"
    )]
    pub home_team_id: Option<String>,
    #[serde(
        default,
        alias = "awayTeamId",
        alias = "away_team",
        alias = "awayTeam",
        alias = "away"
    )]
    pub away_team_id: Option<String>,
    #[serde(default, alias = "gameDate", alias = "game_date", alias = "start")]
    pub date: Option<String>,
    #[serde(default, alias = "gameTime", alias = "tipoff")]
    pub time: Option<String>,
    #[serde(default, alias = "venueId", alias = "location")]
    pub venue: Option<String>,
    #[serde(default, alias = "sportType")]
    pub sport: Option<String>,
    #[serde(default, alias = "gameStatus")]
    pub status: Option<String>,
}
