//! OCR text-presence filtering for scraped images.
//!
//! Poster candidates are only worth relaying if the artwork carries legible
//! text (a title treatment, a logo). The filter fetches the image bytes and
//! runs a Tesseract pass; an image qualifies iff any text at all is
//! recognized.
//!
//! The filter is deliberately fail-closed: a URL that cannot be fetched,
//! decoded, or recognized is treated as "no text present" rather than
//! surfacing an error to the scraper.

mod tesseract;

pub use tesseract::TesseractTextFilter;

use async_trait::async_trait;

/// Decides whether an image contains legible text.
#[async_trait]
pub trait TextFilter: Send + Sync {
    /// Fetch the image at `image_url` and report whether OCR finds any
    /// non-whitespace text in it. Never fails; unverifiable images are
    /// reported as text-free.
    async fn has_text(&self, image_url: &str) -> bool;
}
