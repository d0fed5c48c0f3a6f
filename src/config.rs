//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): SQLite connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `SEED_SOURCE_URL` (optional): upstream feed serving the seed JSON array,
///   defaults to the public product-transaction dataset
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_seed_source_url")]
    pub seed_source_url: String,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

/// Default seed feed if SEED_SOURCE_URL environment variable is not set.
fn default_seed_source_url() -> String {
    "https://s3.amazonaws.com/roxiler.com/product_transaction.json".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DATABASE_URL)
    /// - Environment variable values cannot be parsed into expected types
    /// - `SEED_SOURCE_URL` is not a valid http(s) URL
    pub fn from_env() -> anyhow::Result<Self> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: database_url -> DATABASE_URL
        let config = envy::from_env::<Config>()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject seed URLs that the fetch step could never use.
    ///
    /// A malformed feed URL fails startup here rather than surfacing as a
    /// 502 on the first `/initialize` call.
    fn validate(&self) -> anyhow::Result<()> {
        let parsed = url::Url::parse(&self.seed_source_url)
            .map_err(|e| anyhow::anyhow!("SEED_SOURCE_URL is not a valid URL: {e}"))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(anyhow::anyhow!(
                "SEED_SOURCE_URL must use http or https, got {other}"
            )),
        }
    }
}
