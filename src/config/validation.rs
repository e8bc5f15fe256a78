use crate::constants::logging::VALID_LEVELS;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `log_level` - The log level for the crate target
/// * `log_file_path` - Optional log file path to validate
///
/// # Validation Rules
/// - Log level must be one of trace, debug, info, warn, error
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(log_level: &str, log_file_path: &Option<String>) -> Result<(), AppError> {
    if !VALID_LEVELS.iter().any(|level| *level == log_level) {
        return Err(AppError::config_error(format!(
            "Invalid log level '{log_level}', expected one of: {}",
            VALID_LEVELS.join(", ")
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
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
