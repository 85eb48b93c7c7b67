use std::sync::Arc;

use crate::access::AccessControl;
use crate::config::Config;
use crate::domain::PlatformRegistry;
use crate::ocr::{TesseractTextFilter, TextFilter};
use crate::scraper::{ChromeScraper, PosterScraper};

/// Wires together every service the command handlers need. Built once in
/// `main` and shared behind an `Arc` for the lifetime of the process.
pub struct AppContext {
    pub config: Config,
    pub registry: PlatformRegistry,
    pub access: AccessControl,
    pub scraper: Arc<dyn PosterScraper>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let filter: Arc<dyn TextFilter> = Arc::new(TesseractTextFilter::new());
        let scraper: Arc<dyn PosterScraper> =
            Arc::new(ChromeScraper::new(config.scraper.clone(), filter));

        Self::with_scraper(config, scraper)
    }

    /// Build a context around an explicit scraper implementation. Used by
    /// tests to substitute a stub for the browser pipeline.
    pub fn with_scraper(config: Config, scraper: Arc<dyn PosterScraper>) -> Self {
        let registry = PlatformRegistry::new();
        let access = AccessControl::new(config.owner_id);

        Self {
            config,
            registry,
            access,
            scraper,
        }
    }
}
