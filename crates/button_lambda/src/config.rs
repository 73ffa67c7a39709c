use std::fmt;

use button_core::endpoint::{
    datapoints_endpoint, EndpointError, DEFAULT_API_BASE, DEFAULT_GOAL, DEFAULT_USER,
};
use thiserror::Error;

pub const TOKEN_VAR: &str = "BEEMINDER_TOKEN";
pub const USER_VAR: &str = "BEEMINDER_USER";
pub const GOAL_VAR: &str = "BEEMINDER_GOAL";
pub const API_BASE_VAR: &str = "BEEMINDER_API_BASE";
pub const LOG_FORMAT_VAR: &str = "BUTTON_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be configured")]
    Missing(&'static str),
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
    #[error("BUTTON_LOG_FORMAT must be 'json' or 'text', got '{0}'")]
    LogFormat(String),
}

/// Settings resolved once at cold start and injected into the handler.
#[derive(Clone, PartialEq, Eq)]
pub struct ButtonConfig {
    pub auth_token: String,
    pub datapoints_endpoint: String,
    pub log_format: LogFormat,
}

impl ButtonConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let auth_token = lookup(TOKEN_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing(TOKEN_VAR))?;

        let api_base = lookup(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let user = lookup(USER_VAR).unwrap_or_else(|| DEFAULT_USER.to_string());
        let goal = lookup(GOAL_VAR).unwrap_or_else(|| DEFAULT_GOAL.to_string());
        let datapoints_endpoint = datapoints_endpoint(&api_base, &user, &goal)?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(raw) => parse_log_format(&raw)?,
        };

        Ok(Self {
            auth_token,
            datapoints_endpoint,
            log_format,
        })
    }
}

impl fmt::Debug for ButtonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonConfig")
            .field("auth_token", &"<redacted>")
            .field("datapoints_endpoint", &self.datapoints_endpoint)
            .field("log_format", &self.log_format)
            .finish()
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "json" => Ok(LogFormat::Json),
        "text" | "pretty" => Ok(LogFormat::Text),
        _ => Err(ConfigError::LogFormat(raw.to_string())),
    }
}
