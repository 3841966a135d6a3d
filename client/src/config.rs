//! Client configuration loaded via OrthoConfig.
//!
//! Values come from `PROFILE_CLIENT_*` environment variables or a config
//! file; accessors apply the defaults so callers never see raw options.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;
use thiserror::Error;

use crate::outbound::linkedin::DEFAULT_API_BASE_URL;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The configured API base URL is not an absolute URL.
    #[error("invalid API base URL '{value}': {message}")]
    InvalidBaseUrl {
        /// Raw configured value.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// No access token was configured.
    #[error("missing access token: set PROFILE_CLIENT_ACCESS_TOKEN or pass --access-token")]
    MissingAccessToken,
}

/// Settings used to build a profile client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PROFILE_CLIENT")]
pub struct ProfileClientSettings {
    /// Bearer token presented to the API.
    pub access_token: Option<String>,
    /// API origin override.
    pub api_base_url: Option<String>,
    /// Request timeout in seconds; unset means no timeout.
    pub timeout_seconds: Option<u64>,
    /// Indent JSON output by default.
    #[ortho_config(default = false)]
    pub pretty: bool,
}

impl ProfileClientSettings {
    /// Return the configured access token.
    ///
    /// An empty value is returned as-is so the client can reject it with
    /// its own credential error.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingAccessToken`] when no token is set.
    pub fn access_token(&self) -> Result<&str, SettingsError> {
        self.access_token
            .as_deref()
            .ok_or(SettingsError::MissingAccessToken)
    }

    /// Return the configured API origin, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBaseUrl`] when the override does not
    /// parse as an absolute URL.
    pub fn api_base_url(&self) -> Result<Url, SettingsError> {
        let raw = self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL);
        Url::parse(raw).map_err(|error| SettingsError::InvalidBaseUrl {
            value: raw.to_owned(),
            message: error.to_string(),
        })
    }

    /// Return the configured request timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
