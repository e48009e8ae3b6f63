use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Data-quality errors collected per record during bulk normalization
    #[error("Invalid game date '{value}': {message}")]
    InvalidDate { value: String, message: String },

    #[error("Unknown team id '{team_id}' (not in the supplied roster)")]
    UnknownTeam { team_id: String },

    #[error("Game has identical home and away team: '{team_id}'")]
    SelfMatch { team_id: String },

    // Caller contract violations, raised synchronously
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },

    #[error("Failed to read schedule file '{path}': {message}")]
    ScheduleFile { path: String, message: String },

    #[error("Failed to parse schedule JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create an invalid-date error with the offending value and parser message
    pub fn invalid_date(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an unknown-team error
    pub fn unknown_team(team_id: impl Into<String>) -> Self {
        Self::UnknownTeam {
            team_id: team_id.into(),
        }
    }

    /// Create a self-match error (home == away)
    pub fn self_match(team_id: impl Into<String>) -> Self {
        Self::SelfMatch {
            team_id: team_id.into(),
        }
    }

    /// Create an invalid-range error for a date-range filter
    pub fn invalid_range(start: impl ToString, end: impl ToString) -> Self {
        Self::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Create a schedule file error with context
    pub fn schedule_file(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ScheduleFile {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }
}
