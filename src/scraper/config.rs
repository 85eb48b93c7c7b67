use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the poster scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Whether to run the browser in headless mode (default: true)
    pub headless: bool,

    /// Grace period after navigation for dynamic content in seconds (default: 5)
    pub wait_after_load_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            headless: true,
            wait_after_load_secs: 5,
        }
    }
}

impl ScraperConfig {
    /// Get the post-navigation grace period as a Duration
    pub fn wait_after_load(&self) -> Duration {
        Duration::from_secs(self.wait_after_load_secs)
    }
}
