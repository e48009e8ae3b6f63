pub mod loader;
pub mod models;
pub mod normalizer;

pub use loader::{ScheduleFile, load_schedule_file};
pub use models::{GameRecord, GameStatus, RawGame, Team, TeamId};
pub use normalizer::{NormalizationIssue, NormalizationReport, normalize_game, normalize_games};
