//! Tracing subscriber setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogConfig;

const LEVELS: [&str; 4] = ["debug", "info", "warn", "error"];

/// Filter directives derived from `LOG_LEVEL`.
///
/// Unknown levels fall back to `info`. sqlx statement logging stays at
/// `warn` unless the level is stricter.
pub fn default_directives(level: &str) -> String {
    let level = level.trim().to_ascii_lowercase();
    let level = if LEVELS.contains(&level.as_str()) {
        level
    } else {
        "info".to_string()
    };
    let sqlx = if level == "error" { "error" } else { "warn" };
    format!("{level},idm_api={level},idm_core={level},idm_db={level},tower_http={level},sqlx={sqlx}")
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `LOG_LEVEL` when set. Develop mode prints
/// human-readable lines, otherwise one JSON object per event.
pub fn init_tracing(config: &LogConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.develop_mode {
        registry.with(fmt::layer().pretty()).try_init()
    } else {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
    }
}
