use std::sync::Arc;

use clap::Parser;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use posterbot::app::AppContext;
use posterbot::bot::{self, Command};
use posterbot::config::Config;
use posterbot::server;

#[derive(Parser)]
#[command(name = "posterbot")]
#[command(about = "OTT poster scraper Telegram bot", long_about = None)]
struct Cli {
    /// Receive updates via webhook instead of long polling
    #[arg(long)]
    webhook: bool,

    /// Override the listen port from the environment
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    let bot = Bot::new(config.bot_token.clone());
    let ctx = Arc::new(AppContext::new(config));

    bot.set_my_commands(Command::bot_commands()).await?;

    if cli.webhook {
        bot::run_webhook(bot, ctx).await?;
    } else {
        // Liveness server runs independently of the polling loop and
        // shares nothing with it.
        let port = ctx.config.port;
        tokio::spawn(async move {
            if let Err(e) = server::run_health_server(port).await {
                error!("Liveness server failed: {}", e);
            }
        });

        bot::run_polling(bot, ctx).await;
    }

    Ok(())
}
