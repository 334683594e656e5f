//! Completion API configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Completion API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API key for the completion service
    pub api_key: Option<String>,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate completion API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("AI__API_KEY"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout("AI__TIMEOUT_SECS"));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.timeout_secs, 60);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 30,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_has_api_key() {
        let config = AiConfig {
            api_key: Some("sk-xxx".to_string()),
            ..Default::default()
        };
        assert!(config.has_api_key());

        let config = AiConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_validation_missing_key() {
        let config = AiConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_base_url() {
        let config = AiConfig {
            api_key: Some("sk-xxx".to_string()),
            base_url: "ftp://api.openai.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_model() {
        let config = AiConfig {
            api_key: Some("sk-xxx".to_string()),
            model: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        let config = AiConfig {
            api_key: Some("sk-xxx".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
