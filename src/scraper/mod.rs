//! Poster scraping from OTT platform homepages.
//!
//! # Architecture
//!
//! ```text
//! PlatformEntry → ChromeScraper → rendered HTML → poster_candidates
//!     → select_posters (TextFilter per image) → PosterResult
//! ```
//!
//! Each scrape launches a fresh headless browser session, captures the
//! rendered markup after a short grace period, and tears the session down
//! before any image is inspected. Candidate images are then passed through
//! the OCR text filter in document order until three qualify.

mod chrome;
mod config;
mod extractor;

pub use chrome::ChromeScraper;
pub use config::ScraperConfig;
pub use extractor::poster_candidates;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{PlatformEntry, PosterResult};
use crate::ocr::TextFilter;

/// Poster/portrait/cover — one slot per accepted image.
pub const MAX_POSTERS: usize = 3;

/// Trait for poster scraping implementations
#[async_trait]
pub trait PosterScraper: Send + Sync {
    /// Scrape a platform homepage and return up to three qualifying
    /// poster URLs. Failure is a visible `Err`; the sentinel result is
    /// the handler's concern, not the scraper's.
    async fn scrape(&self, entry: &PlatformEntry) -> Result<PosterResult>;
}

/// Run candidates through the text filter in discovery order, stopping as
/// soon as [`MAX_POSTERS`] are accepted. Candidates past the cutoff are
/// never inspected, so a page with many images costs at most the OCR calls
/// needed to find three hits.
pub async fn select_posters(candidates: &[String], filter: &dyn TextFilter) -> Vec<String> {
    let mut accepted = Vec::new();

    for src in candidates {
        if accepted.len() >= MAX_POSTERS {
            break;
        }
        if filter.has_text(src).await {
            accepted.push(src.clone());
        }
    }

    accepted
}
