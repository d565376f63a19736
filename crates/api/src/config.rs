use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use validator::Validate;

/// Errors raised while loading [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable is present but cannot be parsed.
    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// Required settings are missing or out of range.
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Logging settings, consumed by [`crate::logging::init_tracing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `debug`, `info`, `warn` or `error` (case-insensitive).
    pub level: String,
    /// Human-readable output instead of JSON lines.
    pub develop_mode: bool,
}

/// Server configuration loaded from environment variables.
///
/// `DATABASE_URL`, `APP_NAME` and `APP_VERSION` are required; everything
/// else has a default suitable for local development.
#[derive(Debug, Clone, Validate)]
pub struct ServerConfig {
    /// PostgreSQL connection string.
    #[validate(length(min = 1, message = "DATABASE_URL is required"))]
    pub database_url: String,
    /// Application name reported by `/internal/info`.
    #[validate(length(min = 1, message = "APP_NAME is required"))]
    pub app_name: String,
    /// Application version reported by `/internal/info`.
    #[validate(length(min = 1, message = "APP_VERSION is required"))]
    pub app_version: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    #[validate(range(min = 1, message = "REQUEST_TIMEOUT_SECS must be positive"))]
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections (default: `20`).
    #[validate(range(min = 1, message = "DB_MAX_CONNECTIONS must be positive"))]
    pub db_max_connections: u32,
    pub log: LogConfig,
}

/// Load a `.env` file into the process environment, if one exists.
///
/// The path defaults to `.env` and can be overridden with `IDM_ENV_FILE`.
/// Returns the path that was loaded. Variables already set in the process
/// environment win over the file.
pub fn load_env_file() -> Option<PathBuf> {
    let path = std::env::var("IDM_ENV_FILE").unwrap_or_else(|_| ".env".into());
    dotenvy::from_filename(path).ok()
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `DATABASE_URL`         | required                   |
    /// | `APP_NAME`             | required                   |
    /// | `APP_VERSION`          | required                   |
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `LOG_LEVEL`            | `info`                     |
    /// | `LOG_DEVELOP_MODE`     | `false`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let config = Self {
            database_url: var("DATABASE_URL", ""),
            app_name: var("APP_NAME", ""),
            app_version: var("APP_VERSION", ""),
            host: var("HOST", "0.0.0.0"),
            port: parse_var(&lookup, "PORT", "8080")?,
            cors_origins,
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "30")?,
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", "20")?,
            log: LogConfig {
                level: var("LOG_LEVEL", "info"),
                develop_mode: var("LOG_DEVELOP_MODE", "false").eq_ignore_ascii_case("true"),
            },
        };

        config
            .validate()
            .map_err(|e| ConfigError::Validation(idm_core::validation::describe(&e)))?;
        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: value.clone(),
        reason: e.to_string(),
    })
}
