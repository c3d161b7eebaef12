use tracing_subscriber::EnvFilter;

use crate::presentation::config::{Environment, LoggingSettings};

/// Subscriber setup resolved from the `logging` settings section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    /// Directives used when `RUST_LOG` is unset or unparsable.
    pub default_filter: String,
}

impl TracingConfig {
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        Self {
            environment,
            json_format: logging.json_format,
            default_filter: logging.filter.clone(),
        }
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}
