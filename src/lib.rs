//! Matchup/Availability Matrix Engine
//!
//! This library builds a team-by-team matchup matrix from a flat list of
//! game records, classifies scheduling conflicts (double-booked dates,
//! venues and participants) and computes load statistics: home/away
//! balance, rest-day gaps, back-to-back counts and weekly game density.
//!
//! Everything is a synchronous pure function over in-memory data: the
//! same `(games, teams, filter)` inputs always produce the same matrix.
//!
//! # Examples
//!
//! ```rust
//! use matchup_matrix::matrix::{ConflictLevel, Matrix};
//! use matchup_matrix::schedule::normalize_games;
//! use matchup_matrix::testing_utils::TestDataBuilder;
//!
//! let teams = TestDataBuilder::create_teams(&["kansas", "baylor", "tcu"]);
//! let roster = teams.iter().map(|t| t.id.clone()).collect();
//!
//! let raw_games = vec![
//!     TestDataBuilder::create_raw_game("kansas", "baylor", "2024-09-01"),
//!     TestDataBuilder::create_raw_game("kansas", "baylor", "2024-09-01"),
//! ];
//! let report = normalize_games(&raw_games, &roster);
//! assert!(report.is_clean());
//!
//! let matrix = Matrix::build(&report.games, &teams);
//! let cell = matrix.get_cell("baylor", "kansas").unwrap();
//! assert_eq!(cell.conflict_level(), ConflictLevel::Conflict);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod matrix;
pub mod report;
pub mod schedule;
pub mod stats;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use matrix::{ConflictLevel, Matrix, MatrixCell, PairKey, classify_games};
pub use schedule::{
    GameRecord, GameStatus, NormalizationReport, RawGame, Team, TeamId, load_schedule_file,
    normalize_games,
};
pub use stats::ScheduleStatistics;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
