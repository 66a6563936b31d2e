//! Configuration types.

use crate::error::ConfigError;

/// Wizard configuration.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// Minimum accepted password length.
    pub password_min_len: usize,
    /// Base URL of the platform API (professions, clubs, register).
    pub api_base: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            password_min_len: 6,
            api_base: "http://localhost:3000".to_string(),
        }
    }
}

impl WizardConfig {
    /// Build the live configuration from the environment.
    ///
    /// `SIGNUP_API_BASE` is required; there is no implicit default host
    /// for a live run.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_api_base(std::env::var("SIGNUP_API_BASE").ok())
    }

    fn from_api_base(api_base: Option<String>) -> Result<Self, ConfigError> {
        let api_base = api_base
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("SIGNUP_API_BASE".to_string()))?;
        Ok(Self {
            api_base,
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_base_is_a_config_error() {
        assert!(matches!(
            WizardConfig::from_api_base(None),
            Err(ConfigError::MissingEnvVar(var)) if var == "SIGNUP_API_BASE"
        ));
        assert!(matches!(
            WizardConfig::from_api_base(Some("   ".into())),
            Err(ConfigError::MissingEnvVar(_))
        ));
    }

    #[test]
    fn api_base_from_env_keeps_validation_defaults() {
        let config =
            WizardConfig::from_api_base(Some("https://platform.example.com".into())).unwrap();
        assert_eq!(config.api_base, "https://platform.example.com");
        assert_eq!(config.password_min_len, 6);
    }
}
