//! # Posterbot
//!
//! A Telegram bot that scrapes poster artwork from OTT streaming platform
//! homepages and relays qualifying image URLs back to the chat.
//!
//! ## Architecture
//!
//! ```text
//! Command → AccessControl gate → PlatformRegistry lookup
//!     → ChromeScraper → TextFilter (OCR) per image → reply
//! ```
//!
//! - [`scraper`]: headless-Chromium page capture and poster selection
//! - [`ocr`]: text-presence filtering of candidate images
//! - [`access`]: in-memory authorized-user list, owner-gated mutation
//! - [`bot`]: teloxide command dispatch and reply formatting
//! - [`server`]: liveness endpoint for the polling deployment
//!
//! ## Modules
//!
//! - [`app`]: application context and error types
//! - [`config`]: env-driven runtime configuration
//! - [`domain`]: core domain models (PlatformEntry, PosterResult)
//! - [`links`]: hosting-provider link extraction for `/scrape`

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all services:
/// registry, access control, scraper.
pub mod app;

/// In-memory authorized-user list with owner-only mutation.
pub mod access;

/// Telegram command surface: command enum, handlers, reply formatting,
/// polling and webhook run loops.
pub mod bot;

/// Runtime configuration read from the environment at startup.
pub mod config;

/// Core domain models.
///
/// - [`PlatformEntry`](domain::PlatformEntry): a supported OTT platform
/// - [`PlatformRegistry`](domain::PlatformRegistry): command → platform table
/// - [`PosterResult`](domain::PosterResult): one scrape's output
pub mod domain;

/// Hosting-provider link extraction for the `/scrape` command.
pub mod links;

/// OCR text-presence filtering of candidate images.
pub mod ocr;

/// Headless-browser poster scraping.
pub mod scraper;

/// HTTP liveness endpoint served alongside the polling loop.
pub mod server;
