use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::warn;

use crate::app::{BotError, Result};
use crate::ocr::TextFilter;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "Mozilla/5.0";

/// Text filter backed by the Tesseract CLI.
///
/// Images are fetched over HTTP, decoded with the `image` crate, re-encoded
/// to PNG in a temp file, and handed to `tesseract <file> stdout`.
pub struct TesseractTextFilter {
    client: Client,
}

impl TesseractTextFilter {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Fetch, decode, and OCR one image, returning the recognized text.
    async fn recognize(&self, image_url: &str) -> Result<String> {
        let response = self.client.get(image_url).send().await?;
        response.error_for_status_ref()?;
        let bytes = response.bytes().await?;

        let img = image::load_from_memory(&bytes)
            .map_err(|e| BotError::Ocr(format!("Failed to decode image: {}", e)))?;

        // Tesseract reads from a file, so round-trip through a temp PNG.
        // Nothing in the decode path guarantees the source format, hence
        // the re-encode rather than writing the raw bytes.
        let temp_input = NamedTempFile::with_suffix(".png")?;
        img.to_rgb8()
            .save(temp_input.path())
            .map_err(|e| BotError::Ocr(format!("Failed to write temp image: {}", e)))?;

        let output = Command::new("tesseract")
            .arg(temp_input.path())
            .arg("stdout")
            .arg("-l")
            .arg("eng")
            .output()
            .await
            .map_err(|e| BotError::Ocr(format!("Failed to run tesseract: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BotError::Ocr(format!("Tesseract failed: {}", stderr)));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for TesseractTextFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextFilter for TesseractTextFilter {
    async fn has_text(&self, image_url: &str) -> bool {
        match self.recognize(image_url).await {
            Ok(text) => !text.trim().is_empty(),
            Err(e) => {
                warn!("OCR check failed for {}: {}", image_url, e);
                false
            }
        }
    }
}
