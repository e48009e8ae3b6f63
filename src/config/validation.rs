use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - If a schedule file is set, it cannot be empty and must end in .json
/// - If a default sport is set, it cannot be empty or contain whitespace
/// - If a log file path is set, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(
    schedule_file: &Option<String>,
    default_sport: &Option<String>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if let Some(file) = schedule_file {
        if file.is_empty() {
            return Err(AppError::config_error("Schedule file path cannot be empty"));
        }
        if !file.ends_with(".json") {
            return Err(AppError::config_error(
                "Schedule file must be a .json export",
            ));
        }
    }

    if let Some(sport) = default_sport
        && (sport.is_empty() || sport.contains(char::is_whitespace))
    {
        return Err(AppError::config_error(
            "Default sport must be a single non-empty tag",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
