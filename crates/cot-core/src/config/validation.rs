use crate::config::types::CotConfig;
use crate::errors::ConfigError;

/// Validate the merged configuration.
pub fn validate_config(config: &CotConfig) -> Result<(), ConfigError> {
    if let Some(name) = &config.application.name
        && name.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "application.name cannot be empty".to_string(),
        });
    }

    if config.script.interpreter.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "script.interpreter cannot be empty".to_string(),
        });
    }

    if config.wait.poll_interval_ms == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "wait.poll_interval_ms must be greater than 0".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&CotConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_application_name_rejected() {
        let mut config = CotConfig::default();
        config.application.name = Some("  ".to_string());
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("application.name"));
    }

    #[test]
    fn test_empty_interpreter_rejected() {
        let mut config = CotConfig::default();
        config.script.interpreter = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut config = CotConfig::default();
        config.wait.poll_interval_ms = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("poll_interval_ms"));
    }
}
