//! Structured logging setup built on `tracing-subscriber`.

use serde::{Deserialize, Serialize};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info,easyshop=debug,sqlx=warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Fails if a global subscriber
/// is already installed.
#[cfg(feature = "logging")]
pub fn init_logging(config: &LoggingConfig) -> crate::StoreResult<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| crate::StoreError::configuration(format!("Invalid log filter: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| {
        crate::StoreError::internal(format!("Failed to install subscriber: {}", e))
    })?;

    tracing::info!(level = %config.level, json = config.json, "Logging initialized");
    Ok(())
}

/// No-op when the `logging` feature is disabled.
#[cfg(not(feature = "logging"))]
pub fn init_logging(_config: &LoggingConfig) -> crate::StoreResult<()> {
    Ok(())
}
