//! Configuration loaded from environment variables.
//!
//! The embedding host loads the environment (e.g. a dotenv file) before
//! calling [`load_from_env`]; configuration is read once and validated
//! before any state is constructed.
//!
//! ## Variables
//!
//! - `RUST_LOG` - log filter (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)
//! - `MEMBER_PAGE_SIZE` - roster page size (default: 6)

use anyhow::Result;
use std::env;

use crate::domain::api::DEFAULT_PAGE_SIZE;

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    /// Members fetched per roster page (`MEMBER_PAGE_SIZE`).
    pub member_page_size: u32,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults
    /// for everything unset.
    pub fn from_env() -> Self {
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let member_page_size = env::var("MEMBER_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            log_level,
            log_format,
            member_page_size,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `member_page_size` is zero or larger than 100
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.member_page_size == 0 {
            anyhow::bail!("MEMBER_PAGE_SIZE must be at least 1");
        }

        if self.member_page_size > 100 {
            anyhow::bail!(
                "MEMBER_PAGE_SIZE is too large (max: 100), got {}",
                self.member_page_size
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            member_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

/// Initializes the tracing subscriber according to the configuration.
///
/// Safe to call more than once; later calls are no-ops when a global
/// subscriber is already installed.
pub fn init_tracing(config: &Config) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
