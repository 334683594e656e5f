//! HTTP server configuration

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Where and how the HTTP server listens.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// Tracing filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whole-request timeout in seconds.
    ///
    /// Must outlive the upstream completion timeout, or slow upstream calls
    /// would be cut off before the handler can substitute a fallback. The
    /// suggestion route can spend up to two upstream timeouts in sequence,
    /// which the default accommodates.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Comma-separated list of allowed CORS origins. Empty means any origin.
    pub cors_origins: Option<String>,
}

/// Deployment environment, mirroring the `development`/`production` split
/// of the usual web-framework convention.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    #[serde(alias = "dev")]
    Development,
    #[serde(alias = "prod")]
    Production,
}

impl ServerConfig {
    /// The address to bind the listener to.
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Allowed CORS origins, split and trimmed. Empty segments (trailing
    /// commas and the like) are dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 600 {
            return Err(ValidationError::InvalidTimeout("SERVER__REQUEST_TIMEOUT_SECS"));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout_secs(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info,symptom_scout=debug".to_string()
}

fn default_request_timeout_secs() -> u64 {
    150
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.environment, Environment::Development);
        assert!(config.cors_origins_list().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_aliases() {
        let parsed: Environment = serde_json::from_str("\"prod\"").unwrap();
        assert_eq!(parsed, Environment::Production);
        let parsed: Environment = serde_json::from_str("\"development\"").unwrap();
        assert_eq!(parsed, Environment::Development);
    }

    #[test]
    fn test_is_production() {
        let config = ServerConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert!(config.is_production());
        assert!(!ServerConfig::default().is_production());
    }

    #[test]
    fn test_cors_origins_split_and_trimmed() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173, http://localhost:3000,".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.cors_origins_list(),
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
    }

    #[test]
    fn test_rejects_port_zero() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPort));
    }

    #[test]
    fn test_rejects_timeout_out_of_bounds() {
        for secs in [0, 601] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidTimeout("SERVER__REQUEST_TIMEOUT_SECS"))
            );
        }
    }
}
