use crate::error::AppError;
use std::path::Path;

/// Validates the provider settings and optional log path
///
/// # Validation Rules
/// - API key cannot be empty
/// - Base URL cannot be empty and must use http:// or https://
/// - Competition code cannot be empty
/// - If log file path is provided, it cannot be empty and its parent directory must be creatable
pub fn validate_config(
    api_base_url: &str,
    api_key: &str,
    competition_code: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_key.trim().is_empty() {
        return Err(AppError::config_error("Football API key is required"));
    }

    if api_base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    if competition_code.trim().is_empty() {
        return Err(AppError::config_error("Competition code cannot be empty"));
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
