//! Runtime configuration.
//!
//! Everything is read once from the environment at startup; the scraper
//! settings ride along with their defaults. Only `BOT_TOKEN` is mandatory.

use crate::app::{BotError, Result};
use crate::scraper::ScraperConfig;

pub const DEFAULT_OWNER_ID: i64 = 6390511215;
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Main configuration struct.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot API token (`BOT_TOKEN`, required).
    pub bot_token: String,
    /// The one user allowed to mutate the authorized list (`OWNER_ID`).
    pub owner_id: i64,
    /// Externally reachable base URL for webhook mode (`BASE_URL`).
    pub base_url: String,
    /// Listen port for the liveness server or webhook listener (`PORT`).
    pub port: u16,
    pub scraper: ScraperConfig,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    /// for everything except the bot token.
    pub fn from_env() -> Result<Self> {
        let bot_token = std::env::var("BOT_TOKEN")
            .map_err(|_| BotError::Config("BOT_TOKEN is not set".to_string()))?;

        let owner_id = Self::parse_var("OWNER_ID", DEFAULT_OWNER_ID)?;
        let port = Self::parse_var("PORT", DEFAULT_PORT)?;
        let base_url =
            std::env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            bot_token,
            owner_id,
            base_url,
            port,
            scraper: ScraperConfig::default(),
        })
    }

    fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
        match std::env::var(name) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| BotError::Config(format!("Invalid {}: {}", name, raw))),
            Err(_) => Ok(default),
        }
    }
}
