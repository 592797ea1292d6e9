use std::env;
use anyhow::{Context, Result};

/// The application's configuration.
#[derive(Clone)]
pub struct Config {
    /// The URL of the PostgreSQL database.
    pub database_url: String,
    /// The TCP port the HTTP server listens on.
    pub port: u16,
    /// The directory static assets are served from.
    pub static_dir: String,
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("Invalid PORT")?,
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "public".to_string()),
        })
    }
}
