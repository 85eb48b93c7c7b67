use std::sync::Arc;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tracing::debug;

use crate::app::{BotError, Result};
use crate::domain::{PlatformEntry, PosterResult};
use crate::ocr::TextFilter;
use crate::scraper::config::ScraperConfig;
use crate::scraper::extractor::poster_candidates;
use crate::scraper::{select_posters, PosterScraper};

/// Chrome-based poster scraper using chromiumoxide
pub struct ChromeScraper {
    config: ScraperConfig,
    filter: Arc<dyn TextFilter>,
}

impl ChromeScraper {
    pub fn new(config: ScraperConfig, filter: Arc<dyn TextFilter>) -> Self {
        Self { config, filter }
    }

    /// Launch a fresh browser session, capture the rendered markup of
    /// `url`, and tear the session down. The session never outlives one
    /// call, so a crashed or hung platform page cannot poison the next
    /// command.
    async fn fetch_page_html(&self, url: &str) -> Result<String> {
        let mut builder = BrowserConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage");

        if !self.config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder
            .build()
            .map_err(|e| BotError::Scrape(format!("Failed to build browser config: {}", e)))?;

        let (mut browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| BotError::Scrape(format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            )))?;

        // Spawn the browser handler
        let handler_task = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {
                // Handle browser events
            }
        });

        let capture = async {
            let page = browser
                .new_page(url)
                .await
                .map_err(|e| BotError::Scrape(format!("Failed to create page: {}", e)))?;

            page.wait_for_navigation()
                .await
                .map_err(|e| BotError::Scrape(format!("Navigation failed: {}", e)))?;

            // Grace period for dynamically loaded artwork
            tokio::time::sleep(self.config.wait_after_load()).await;

            let html = page
                .content()
                .await
                .map_err(|e| BotError::Scrape(format!("Failed to capture page source: {}", e)))?;

            let _ = page.close().await;
            Ok::<String, BotError>(html)
        }
        .await;

        // Teardown happens whether or not the capture succeeded.
        let _ = browser.close().await;
        let _ = browser.wait().await;
        handler_task.abort();

        capture
    }
}

#[async_trait]
impl PosterScraper for ChromeScraper {
    async fn scrape(&self, entry: &PlatformEntry) -> Result<PosterResult> {
        let html = self.fetch_page_html(entry.url).await?;
        let candidates = poster_candidates(&html);
        debug!(
            "{}: {} poster candidates after source filtering",
            entry.name,
            candidates.len()
        );

        let accepted = select_posters(&candidates, self.filter.as_ref()).await;
        Ok(PosterResult::from_accepted(entry.name, entry.language, accepted))
    }
}
