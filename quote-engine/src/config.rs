//! Engine configuration
//!
//! The business timezone for report bucketing and the pricing-table
//! location. The pricing table itself is static data: loaded once at
//! startup, validated, then treated as read-only. Hot reload is an atomic
//! reference swap by the caller so in-flight computations never observe a
//! half-updated table.

use chrono_tz::Tz;
use shared::error::{AppError, AppResult};
use shared::models::PricingConfig;
use std::path::Path;

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | BUSINESS_TIMEZONE | America/New_York | IANA zone for report bucketing |
/// | PRICING_TABLE_PATH | pricing.json | Pricing configuration file |
#[derive(Debug, Clone)]
pub struct Config {
    /// Calendar bucketing happens in this zone, never the host locale
    pub timezone: Tz,
    /// Pricing configuration file location
    pub pricing_table_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing or unparseable values fall back to the defaults; an
    /// unrecognized timezone logs a warning rather than failing startup.
    pub fn from_env() -> Self {
        let timezone = std::env::var("BUSINESS_TIMEZONE")
            .ok()
            .and_then(|name| {
                name.parse::<Tz>()
                    .map_err(|_| {
                        tracing::warn!(
                            "unrecognized BUSINESS_TIMEZONE '{}', using America/New_York",
                            name
                        );
                    })
                    .ok()
            })
            .unwrap_or(chrono_tz::America::New_York);

        Self {
            timezone,
            pricing_table_path: std::env::var("PRICING_TABLE_PATH")
                .unwrap_or_else(|_| "pricing.json".into()),
        }
    }

    /// Override the pricing-table path, commonly for tests
    pub fn with_pricing_table(mut self, path: impl Into<String>) -> Self {
        self.pricing_table_path = path.into();
        self
    }

    /// Load and validate the pricing table this configuration points at
    pub fn load_pricing(&self) -> AppResult<PricingConfig> {
        load_pricing_config(&self.pricing_table_path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Read, parse and validate a pricing configuration file.
///
/// A structurally invalid table is a startup-time defect: this is the only
/// place `InvalidPricingTable` can surface, never during a quote.
pub fn load_pricing_config(path: impl AsRef<Path>) -> AppResult<PricingConfig> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let contents = std::fs::read_to_string(path).map_err(|e| AppError::ConfigLoad {
        path: display.clone(),
        message: e.to_string(),
    })?;

    let config: PricingConfig =
        serde_json::from_str(&contents).map_err(|e| AppError::ConfigLoad {
            path: display,
            message: e.to_string(),
        })?;

    config.validate()?;
    Ok(config)
}
