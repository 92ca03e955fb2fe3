//! Configuration validation
//!
//! Checks a loaded configuration before anything touches storage:
//! - The state key is usable
//! - The state database path points at a file

use super::paxfinder_config::PaxfinderConfig;
use crate::PaxError;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// Validate a Paxfinder configuration, collecting every problem
pub fn validate_config(config: &PaxfinderConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let key = &config.storage.state_key;
    if key.is_empty() {
        errors.push(ValidationError::new(
            "storage.state_key",
            "State key cannot be empty",
        ));
    } else if key.chars().any(char::is_whitespace) {
        errors.push(ValidationError::new(
            "storage.state_key",
            format!("State key '{}' must not contain whitespace", key),
        ));
    }

    let path = &config.storage.path;
    if path.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "storage.path",
            "State database path cannot be empty",
        ));
    } else if path.is_dir() {
        errors.push(ValidationError::new(
            "storage.path",
            format!("{} is a directory, expected a database file", path.display()),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate and convert to a single Config error
pub fn validate_config_result(config: &PaxfinderConfig) -> crate::Result<()> {
    validate_config(config).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        PaxError::Config(format!(
            "Configuration validation failed:\n  - {}",
            messages.join("\n  - ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&PaxfinderConfig::new()).is_ok());
    }

    #[test]
    fn test_empty_state_key() {
        let mut config = PaxfinderConfig::new();
        config.storage.state_key = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "storage.state_key");
    }

    #[test]
    fn test_state_key_with_whitespace() {
        let mut config = PaxfinderConfig::new();
        config.storage.state_key = "people data".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].message.contains("whitespace"));
    }

    #[test]
    fn test_directory_path_and_bad_key_reported_together() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = PaxfinderConfig::new();
        config.storage.path = temp_dir.path().to_path_buf();
        config.storage.state_key = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);

        let err = validate_config_result(&config).unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));
    }
}
