/// Result of one poster-scrape invocation. Built fresh per command and
/// consumed immediately to format a reply; never persisted.
///
/// The three URL slots are filled in discovery order, not by any semantic
/// classification of the images themselves. Title and year are fixed
/// placeholders; the scraper never extracts real metadata from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterResult {
    pub title: String,
    pub year: String,
    pub language: String,
    pub poster: Option<String>,
    pub portrait: Option<String>,
    pub cover: Option<String>,
}

impl PosterResult {
    /// Build a result from up to three accepted image URLs, assigned to
    /// poster/portrait/cover in the order they were discovered.
    pub fn from_accepted(name: &str, language: &str, mut accepted: Vec<String>) -> Self {
        accepted.truncate(3);
        let mut slots = accepted.into_iter();
        Self {
            title: format!("{} Title", name),
            year: "2025".to_string(),
            language: language.to_string(),
            poster: slots.next(),
            portrait: slots.next(),
            cover: slots.next(),
        }
    }

    /// The sentinel produced when scraping fails outright.
    pub fn scrape_error(name: &str, language: &str) -> Self {
        Self {
            title: format!("{} Error", name),
            year: "N/A".to_string(),
            language: language.to_string(),
            poster: None,
            portrait: None,
            cover: None,
        }
    }

    /// True if no image URL made it into any slot.
    pub fn is_empty(&self) -> bool {
        self.poster.is_none() && self.portrait.is_none() && self.cover.is_none()
    }
}
