use serde::{Deserialize, Serialize};

use crate::validation::{ConfigValidator, ValidationUtils};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub bind_address: String,
    pub cors_enabled: bool,
    pub cors_origins: Vec<String>,
}

impl ConfigValidator for ApiConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        ValidationUtils::validate_not_empty(&self.bind_address, "api.bind_address")?;

        if self.cors_enabled && self.cors_origins.is_empty() {
            return Err(crate::ConfigError::Validation(
                "api.cors_origins cannot be empty when CORS is enabled".to_string(),
            ));
        }

        for origin in &self.cors_origins {
            ValidationUtils::validate_not_empty(origin, "api.cors_origins")?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
}

impl ConfigValidator for ObservabilityConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(crate::ConfigError::Validation(format!(
                "Invalid log level: {}. Valid options: {:?}",
                self.log_level, valid_levels
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_validation() {
        let config = ApiConfig {
            bind_address: "0.0.0.0:8000".to_string(),
            cors_enabled: true,
            cors_origins: vec!["http://localhost:3000".to_string()],
        };
        assert!(config.validate().is_ok());

        let mut invalid_config = config.clone();
        invalid_config.bind_address = "".to_string();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = config.clone();
        invalid_config.cors_origins = vec![];
        assert!(invalid_config.validate().is_err());

        // CORS关闭时允许空的origins列表
        let mut disabled = config.clone();
        disabled.cors_enabled = false;
        disabled.cors_origins = vec![];
        assert!(disabled.validate().is_ok());
    }

    #[test]
    fn test_observability_config_validation() {
        let config = ObservabilityConfig {
            log_level: "info".to_string(),
        };
        assert!(config.validate().is_ok());

        let invalid_config = ObservabilityConfig {
            log_level: "verbose".to_string(),
        };
        assert!(invalid_config.validate().is_err());
    }
}
