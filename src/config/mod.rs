//! Typed environment configuration.
//!
//! Settings are read from the environment (plus a `.env` file in
//! development) with the `SYMPTOM_SCOUT` prefix; nested sections are
//! addressed with double underscores, so `SYMPTOM_SCOUT__SERVER__PORT=5000`
//! lands in `server.port`.
//!
//! # Example
//!
//! ```no_run
//! use symptom_scout::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root configuration for the Symptom Scout service.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server section
    #[serde(default)]
    pub server: ServerConfig,

    /// Completion API section
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// A `.env` file is loaded first when present. Every setting has a
    /// default except the completion API key, whose absence is caught by
    /// [`validate`](Self::validate) rather than here.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value cannot be parsed into its
    /// typed field.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SYMPTOM_SCOUT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation across all sections.
    ///
    /// Beyond per-section checks, the whole-request timeout must exceed the
    /// upstream completion timeout; otherwise a slow completion call would
    /// be cut off before its handler could substitute a fallback.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first value found invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        if self.server.request_timeout_secs <= self.ai.timeout_secs {
            return Err(ValidationError::RequestTimeoutTooShort);
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
