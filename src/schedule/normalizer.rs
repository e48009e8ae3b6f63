use crate::error::AppError;
use crate::schedule::models::{GameRecord, GameStatus, RawGame};
use chrono::{DateTime, NaiveDate, NaiveTime};
use std::collections::HashSet;
use tracing::{debug, warn};

/// One rejected record from a bulk normalization pass.
#[derive(Debug)]
pub struct NormalizationIssue {
    /// Position of the record in the input slice.
    pub index: usize,
    /// Backend-assigned game id, when the record carried one.
    pub game_id: Option<String>,
    pub error: AppError,
}

/// Outcome of a bulk normalization pass: the surviving canonical games plus
/// the per-record issues. Bulk normalization never fails as a whole, so a
/// UI can report "N of M games loaded" with the collected issues.
#[derive(Debug, Default)]
pub struct NormalizationReport {
    pub games: Vec<GameRecord>,
    pub errors: Vec<NormalizationIssue>,
}

impl NormalizationReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Normalizes a batch of raw game records against the known roster.
///
/// Records that fail validation are collected into the report's `errors`
/// alongside their input position; valid records land in `games` in input
/// order. Pure aside from tracing output.
///
/// # Arguments
/// * `raw_games` - Raw records as exported by the scheduling backend
/// * `known_team_ids` - The roster every participant must resolve against
pub fn normalize_games(raw_games: &[RawGame], known_team_ids: &HashSet<String>) -> NormalizationReport {
    let mut report = NormalizationReport::default();

    for (index, raw) in raw_games.iter().enumerate() {
        match normalize_game(raw, known_team_ids) {
            Ok(game) => report.games.push(game),
            Err(error) => {
                warn!(
                    "Rejected game record {} (id: {}): {}",
                    index,
                    raw.id.as_deref().unwrap_or("unknown"),
                    error
                );
                report.errors.push(NormalizationIssue {
                    index,
                    game_id: raw.id.clone(),
                    error,
                });
            }
        }
    }

    debug!(
        "Normalized {} of {} game records ({} rejected)",
        report.games.len(),
        raw_games.len(),
        report.errors.len()
    );
    report
}

/// Normalizes a single raw record, returning the validation error directly.
///
/// Validation rules:
/// - both team ids must be present and resolve in `known_team_ids`
/// - home and away team must differ
/// - the date must parse as an ISO-8601 date or datetime
/// - a missing status defaults to [`GameStatus::Scheduled`]
pub fn normalize_game(
    raw: &RawGame,
    known_team_ids: &HashSet<String>,
) -> Result<GameRecord, AppError> {
    let home_team_id = resolve_team_id(raw.home_team_id.as_deref(), known_team_ids)?;
    let away_team_id = resolve_team_id(raw.away_team_id.as_deref(), known_team_ids)?;

    if home_team_id == away_team_id {
        return Err(AppError::self_match(home_team_id));
    }

    let date_value = raw
        .date
        .as_deref()
        .ok_or_else(|| AppError::invalid_date("<missing>", "no date field present"))?;
    let (date, embedded_time) = parse_game_date(date_value)?;

    // A standalone time field wins over one embedded in the datetime
    let time = raw
        .time
        .as_deref()
        .and_then(parse_game_time)
        .or(embedded_time);

    let status = parse_status(raw.status.as_deref());

    let id = raw
        .id
        .clone()
        .unwrap_or_else(|| format!("{home_team_id}-{away_team_id}-{date}"));

    Ok(GameRecord {
        id,
        home_team_id,
        away_team_id,
        date,
        time,
        venue: raw.venue.clone(),
        sport: raw.sport.clone(),
        status,
    })
}

fn resolve_team_id(
    raw_id: Option<&str>,
    known_team_ids: &HashSet<String>,
) -> Result<String, AppError> {
    let id = raw_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::unknown_team("<missing>"))?;

    if !known_team_ids.contains(id) {
        return Err(AppError::unknown_team(id));
    }
    Ok(id.to_string())
}

/// Parses the backend's date field into a calendar date, plus the
/// time-of-day when the field carried a full datetime.
///
/// Accepts plain ISO dates (`2024-09-01`) and RFC3339 datetimes
/// (`2024-09-01T19:00:00Z`), which is the variance observed in exports.
fn parse_game_date(value: &str) -> Result<(NaiveDate, Option<NaiveTime>), AppError> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok((date, None));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok((dt.date_naive(), Some(dt.time())));
    }

    Err(AppError::invalid_date(
        value,
        "expected YYYY-MM-DD or an RFC3339 datetime",
    ))
}

/// Time-of-day is optional input; an unparseable value is dropped rather
/// than failing the record.
fn parse_game_time(value: &str) -> Option<NaiveTime> {
    let parsed = NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok();
    if parsed.is_none() {
        warn!("Dropping unparseable time-of-day value: '{value}'");
    }
    parsed
}

fn parse_status(value: Option<&str>) -> GameStatus {
    match value.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("confirmed") => GameStatus::Confirmed,
        Some("completed") => GameStatus::Completed,
        Some("cancelled") | Some("canceled") => GameStatus::Cancelled,
        Some("scheduled") | None => GameStatus::Scheduled,
        Some(other) => {
            warn!("Unrecognized game status '{other}', treating as scheduled");
            GameStatus::Scheduled
        }
    }
}
