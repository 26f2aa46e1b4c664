//! Environment configuration for the API server
//!
//! Provider credentials come from `clarion-sources`; this adds the bind
//! address and the engine tunables. Loading fails fast, naming the
//! variable, only for unconditionally required settings.

use clarion_engine::EngineConfig;
use clarion_sources::{CredentialsError, ProviderCredentials};
use std::env;
use thiserror::Error;

/// API configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required credential is missing
    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    /// The configured bind port is not a number
    #[error("CLARION_BIND_PORT must be a number, got '{0}'")]
    InvalidPort(String),
}

/// Configuration for the API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Credentials for the three external providers
    pub credentials: ProviderCredentials,

    /// Bind address (default "0.0.0.0")
    pub bind_address: String,

    /// Bind port (default 8000)
    pub bind_port: u16,

    /// Engine tunables
    pub engine: EngineConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let credentials = ProviderCredentials::from_env()?;

        let bind_address =
            env::var("CLARION_BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string());

        let bind_port = match env::var("CLARION_BIND_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => 8000,
        };

        Ok(Self {
            credentials,
            bind_address,
            bind_port,
            engine: EngineConfig::default(),
        })
    }

    /// Get the full bind address (address:port).
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
