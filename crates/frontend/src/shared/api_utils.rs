//! Backend address for the REST calls
//!
//! The origin is fixed at build time: set `CAMPAIGN_API_BASE` while compiling
//! to point the console at another backend, e.g.
//! `CAMPAIGN_API_BASE=https://api.example.com trunk build`.

use contracts::shared::config::ApiConfig;

/// Resolved backend configuration
pub fn api_config() -> ApiConfig {
    ApiConfig::from_override(option_env!("CAMPAIGN_API_BASE"))
}

