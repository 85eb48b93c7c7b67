//! Telegram command surface.
//!
//! Commands are parsed by teloxide's `BotCommands` derive and routed through
//! a single dptree endpoint with the [`AppContext`] injected as a
//! dependency. Two run modes cover the two deployments: long polling (with
//! a separate liveness server) and an axum-backed webhook listener.

mod format;
mod handlers;

pub use format::{authlist_message, links_message, poster_message, replies};

use std::net::SocketAddr;
use std::sync::Arc;

use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::{dptree, Bot};
use teloxide::update_listeners::webhooks;
use teloxide::utils::command::BotCommands;
use tracing::info;

use crate::app::{AppContext, Result};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Netflix poster links")]
    Netflix,
    #[command(description = "Prime Video poster links")]
    Prime,
    #[command(description = "ZEE5 poster links")]
    Zee5,
    #[command(description = "Hotstar poster links")]
    Hotstar,
    #[command(description = "JioCinema poster links")]
    Jiocinema,
    #[command(description = "MX Player poster links")]
    Mx,
    #[command(description = "Chaupal poster links")]
    Chaupal,
    #[command(description = "Crunchyroll poster links")]
    Crunchyroll,
    #[command(description = "extract known hosting-provider links")]
    Scrape(String),
    #[command(description = "authorize a user (owner only)")]
    Authorize(String),
    #[command(description = "revoke a user (owner only)")]
    Unauthorize(String),
    #[command(description = "list authorized users")]
    Authlist,
    #[command(description = "authorized user count (owner only)")]
    Stats,
    #[command(description = "show this help")]
    Start,
    #[command(description = "show this help")]
    Help,
}

impl Command {
    /// Registry key for platform-scrape commands, `None` for everything
    /// else.
    pub fn platform_key(&self) -> Option<&'static str> {
        match self {
            Command::Netflix => Some("netflix"),
            Command::Prime => Some("prime"),
            Command::Zee5 => Some("zee5"),
            Command::Hotstar => Some("hotstar"),
            Command::Jiocinema => Some("jiocinema"),
            Command::Mx => Some("mx"),
            Command::Chaupal => Some("chaupal"),
            Command::Crunchyroll => Some("crunchyroll"),
            _ => None,
        }
    }
}

fn dispatcher(bot: Bot, ctx: Arc<AppContext>) -> Dispatcher<Bot, teloxide::RequestError, teloxide::dispatching::DefaultKey> {
    let handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(handlers::handle_command);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![ctx])
        .enable_ctrlc_handler()
        .build()
}

/// Long-polling run loop. The liveness server, if any, is the caller's
/// concern.
pub async fn run_polling(bot: Bot, ctx: Arc<AppContext>) {
    info!("Starting bot in long-polling mode");
    dispatcher(bot, ctx).dispatch().await;
}

/// Webhook run loop: Telegram pushes updates to `{base_url}/{token}` on
/// the configured port.
pub async fn run_webhook(bot: Bot, ctx: Arc<AppContext>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], ctx.config.port));
    let url = format!(
        "{}/{}",
        ctx.config.base_url.trim_end_matches('/'),
        ctx.config.bot_token
    )
    .parse::<url::Url>()?;

    info!("Starting bot in webhook mode on {}", addr);

    let listener = webhooks::axum(bot.clone(), webhooks::Options::new(addr, url)).await?;

    dispatcher(bot, ctx)
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    Ok(())
}
