//! Configuration validation.
//!
//! Collects every problem in one pass so a bad deployment fails fast with
//! the full list rather than one error per restart.

use crate::AppConfig;
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Pool size configuration is invalid (min must be <= max, max > 0).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u32, maximum: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String, value: u64 },
    /// Password hash cost is invalid.
    InvalidHashCost { value: u32, minimum: u32, maximum: u32 },
    /// Log filter is empty.
    EmptyLogLevel,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min ({}) and max ({}) must satisfy 0 < min <= max",
                    min, max
                )
            }
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(f, "Pool size {} exceeds maximum allowed ({})", value, maximum)
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::NonPositiveTimeout { name, value } => {
                write!(f, "Timeout '{}' must be positive, got {}", name, value)
            }
            Self::InvalidHashCost { value, minimum, maximum } => {
                write!(
                    f,
                    "Invalid password hash cost: {} (must be between {} and {})",
                    value, minimum, maximum
                )
            }
            Self::EmptyLogLevel => write!(f, "Log level cannot be empty"),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 1000;
    /// Minimum Argon2 memory cost in MiB.
    const MIN_HASH_COST: u32 = 1;
    /// Maximum Argon2 memory cost in MiB.
    const MAX_HASH_COST: u32 = 256;

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_database(&config.database, &mut errors);
        Self::validate_security(&config.security, &mut errors);

        if config.logging.level.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyLogLevel);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_database(config: &crate::DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.url.is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else {
            match Url::parse(&config.url) {
                Ok(url) if url.scheme() == "mysql" => {}
                Ok(url) => errors.push(ConfigValidationError::InvalidUrl {
                    url_type: "database".to_string(),
                    message: format!("unsupported scheme '{}', expected mysql://", url.scheme()),
                }),
                Err(e) => errors.push(ConfigValidationError::InvalidUrl {
                    url_type: "database".to_string(),
                    message: e.to_string(),
                }),
            }
        }

        if config.max_connections == 0 || config.min_connections > config.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if config.max_connections > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                value: config.max_connections,
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        if config.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
                value: 0,
            });
        }
        if config.idle_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.idle_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_security(config: &crate::SecurityConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.password_hash_cost < Self::MIN_HASH_COST
            || config.password_hash_cost > Self::MAX_HASH_COST
        {
            errors.push(ConfigValidationError::InvalidHashCost {
                value: config.password_hash_cost,
                minimum: Self::MIN_HASH_COST,
                maximum: Self::MAX_HASH_COST,
            });
        }
    }
}

/// Formats validation errors for display.
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}
