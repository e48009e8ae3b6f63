use crate::error::AppError;
use crate::schedule::models::{RawGame, Team};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// The scheduling backend's JSON export: the full roster plus the raw game
/// list. This is the only file format the crate consumes.
#[derive(Debug, Deserialize)]
pub struct ScheduleFile {
    pub teams: Vec<Team>,
    pub games: Vec<RawGame>,
}

/// Reads and parses a schedule export from disk.
///
/// # Returns
/// * `Ok(ScheduleFile)` - Parsed roster and raw games
/// * `Err(AppError)` - File unreadable or JSON malformed
pub fn load_schedule_file(path: &str) -> Result<ScheduleFile, AppError> {
    if !Path::new(path).exists() {
        return Err(AppError::schedule_file(path, "file does not exist"));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::schedule_file(path, e.to_string()))?;
    let schedule: ScheduleFile = serde_json::from_str(&content)?;

    info!(
        "Loaded schedule file '{}': {} teams, {} raw games",
        path,
        schedule.teams.len(),
        schedule.games.len()
    );
    Ok(schedule)
}
