//! Server configuration.
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file. Every setting has a default, so an empty environment yields
//! a working server on port 8085.

use todo_core::InputValidation;

const DEFAULT_PORT: u16 = 8085;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (`TODO_HOST`).
    pub host: String,

    /// TCP port (`PORT`).
    pub port: u16,

    /// Log level used when `RUST_LOG` is unset (`TODO_LOG_LEVEL`).
    pub log_level: String,

    /// Reject blank text and unknown user ids on `createTodo`
    /// (`TODO_STRICT_INPUT`).
    pub strict_input: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            strict_input: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env` and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset keys keep
    /// their defaults; set but empty keys are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(port) = get("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        if let Some(host) = get("TODO_HOST") {
            config.host = host;
        }

        if let Some(level) = get("TODO_LOG_LEVEL") {
            config.log_level = level.to_lowercase();
        }

        if let Some(strict) = get("TODO_STRICT_INPUT") {
            config.strict_input = parse_bool("TODO_STRICT_INPUT", &strict)?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn input_validation(&self) -> InputValidation {
        if self.strict_input {
            InputValidation::Strict
        } else {
            InputValidation::Permissive
        }
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    #[error("invalid boolean for {key}: {value:?}")]
    InvalidBool { key: &'static str, value: String },
}
