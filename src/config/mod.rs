use std::env;
use std::time::Duration;

use crate::core::{ReportError, Result};

/// Engine tuning knobs.
///
/// Defaults are safe for embedding; `from_env` follows the host
/// application's environment (and `.env` in development).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Upper bound for each repository fetch; `None` leaves the timeout to
    /// the caller
    pub fetch_timeout: Option<Duration>,

    /// Number of rows kept in the top-products ranking
    pub top_products_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: None,
            top_products_limit: 10,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let fetch_timeout = match env::var("REPORT_FETCH_TIMEOUT_MS") {
            Ok(raw) => {
                let millis: u64 = raw.parse().map_err(|_| {
                    ReportError::configuration("Invalid REPORT_FETCH_TIMEOUT_MS")
                })?;
                Some(Duration::from_millis(millis))
            }
            Err(_) => None,
        };

        let top_products_limit = env::var("REPORT_TOP_PRODUCTS_LIMIT")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| ReportError::configuration("Invalid REPORT_TOP_PRODUCTS_LIMIT"))?;

        let config = Self {
            fetch_timeout,
            top_products_limit,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.top_products_limit == 0 {
            return Err(ReportError::configuration(
                "Top products limit must be greater than 0",
            ));
        }

        if let Some(timeout) = self.fetch_timeout {
            if timeout.is_zero() {
                return Err(ReportError::configuration(
                    "Fetch timeout must be greater than 0 ms",
                ));
            }
        }

        Ok(())
    }
}
