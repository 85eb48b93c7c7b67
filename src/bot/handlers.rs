use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;
use tracing::error;

use crate::access::{GrantOutcome, OwnerOnly, RevokeOutcome};
use crate::app::AppContext;
use crate::bot::format::{self, replies};
use crate::bot::Command;
use crate::domain::PosterResult;
use crate::links::filter_links;

/// What a command handler wants sent back to the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Reply {
    Plain(String),
    Html(String),
    Nothing,
}

impl Reply {
    fn plain(text: impl Into<String>) -> Self {
        Reply::Plain(text.into())
    }
}

/// Single endpoint for every bot command. Reply content is computed by the
/// per-command functions below; this function only talks to Telegram.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: Arc<AppContext>,
) -> ResponseResult<()> {
    // Channel posts and service messages carry no sender; ignore them.
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    let user_id = user.id.0 as i64;

    if let Some(key) = cmd.platform_key() {
        // Platform replies get the original fallback: if the formatted
        // message cannot be delivered, a plain failure notice is tried.
        match platform_reply(&ctx, user_id, key).await {
            Reply::Plain(text) => {
                bot.send_message(msg.chat.id, text).await?;
            }
            Reply::Html(text) => {
                if let Err(e) = bot
                    .send_message(msg.chat.id, text)
                    .parse_mode(ParseMode::Html)
                    .await
                {
                    error!("Bot error: {}", e);
                    bot.send_message(msg.chat.id, replies::SCRAPE_FAILED).await?;
                }
            }
            Reply::Nothing => {}
        }
        return Ok(());
    }

    let reply = match cmd {
        Command::Scrape(args) => scrape_links_reply(&ctx, user_id, &args),
        Command::Authorize(args) => grant_reply(&ctx, user_id, &args),
        Command::Unauthorize(args) => revoke_reply(&ctx, user_id, &args),
        Command::Authlist => Reply::plain(format::authlist_message(&ctx.access.list())),
        Command::Stats => stats_reply(&ctx, user_id),
        Command::Start | Command::Help => Reply::plain(Command::descriptions().to_string()),
        // Platform variants are routed above.
        _ => Reply::Nothing,
    };

    match reply {
        Reply::Plain(text) => {
            bot.send_message(msg.chat.id, text).await?;
        }
        Reply::Html(text) => {
            bot.send_message(msg.chat.id, text)
                .parse_mode(ParseMode::Html)
                .await?;
        }
        Reply::Nothing => {}
    }

    Ok(())
}

/// Gate, scrape, and format for one platform command. The scraper is not
/// touched unless the caller is authorized.
pub(crate) async fn platform_reply(ctx: &AppContext, user_id: i64, key: &str) -> Reply {
    if !ctx.access.is_authorized(user_id) {
        return Reply::plain(replies::UNAUTHORIZED);
    }

    let Some(entry) = ctx.registry.lookup(key) else {
        // Every platform command has a registry row; a miss means the
        // table and the command enum drifted apart.
        error!("no registry entry for platform command '{}'", key);
        return Reply::Nothing;
    };

    let result = match ctx.scraper.scrape(entry).await {
        Ok(result) => result,
        Err(e) => {
            error!("{} scraping failed: {}", entry.name, e);
            PosterResult::scrape_error(entry.name, entry.language)
        }
    };

    if result.is_empty() {
        return Reply::plain(replies::NO_POSTERS);
    }

    Reply::Html(format::poster_message(&result))
}

pub(crate) fn scrape_links_reply(ctx: &AppContext, user_id: i64, args: &str) -> Reply {
    if !ctx.access.is_authorized(user_id) {
        return Reply::plain(replies::UNAUTHORIZED);
    }

    let links: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if links.is_empty() {
        return Reply::plain(replies::USAGE_SCRAPE);
    }

    let kept = filter_links(&links);
    if kept.is_empty() {
        Reply::plain(replies::NO_VALID_LINKS)
    } else {
        Reply::Html(format::links_message(&kept))
    }
}

pub(crate) fn grant_reply(ctx: &AppContext, user_id: i64, args: &str) -> Reply {
    if !ctx.access.is_owner(user_id) {
        return Reply::plain(replies::OWNER_ONLY);
    }

    let Some(target) = parse_user_id(args) else {
        return Reply::plain(replies::USAGE_AUTHORIZE);
    };

    match ctx.access.authorize(user_id, target) {
        Ok(GrantOutcome::Granted) => Reply::plain(format!("✅ Authorized {}", target)),
        Ok(GrantOutcome::AlreadyAuthorized) => Reply::plain(replies::ALREADY_AUTHORIZED),
        Err(OwnerOnly) => Reply::plain(replies::OWNER_ONLY),
    }
}

pub(crate) fn revoke_reply(ctx: &AppContext, user_id: i64, args: &str) -> Reply {
    if !ctx.access.is_owner(user_id) {
        return Reply::plain(replies::OWNER_ONLY);
    }

    let Some(target) = parse_user_id(args) else {
        return Reply::plain(replies::USAGE_UNAUTHORIZE);
    };

    match ctx.access.unauthorize(user_id, target) {
        Ok(RevokeOutcome::Revoked) => Reply::plain(format!("🚫 Revoked {}", target)),
        Ok(RevokeOutcome::NotAuthorized) => Reply::plain(replies::NOT_AUTHORIZED),
        Ok(RevokeOutcome::OwnerImmune) => Reply::plain(replies::OWNER_IMMUNE),
        Err(OwnerOnly) => Reply::plain(replies::OWNER_ONLY),
    }
}

pub(crate) fn stats_reply(ctx: &AppContext, user_id: i64) -> Reply {
    if !ctx.access.is_owner(user_id) {
        return Reply::plain(replies::OWNER_ONLY);
    }
    Reply::plain(format!("📊 Authorized users: {}", ctx.access.count()))
}

/// First whitespace-separated argument parsed as a user identifier.
fn parse_user_id(args: &str) -> Option<i64> {
    args.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::app::{BotError, Result};
    use crate::config::Config;
    use crate::domain::PlatformEntry;
    use crate::scraper::{PosterScraper, ScraperConfig};

    const OWNER: i64 = 6390511215;

    /// Scraper stub returning a canned outcome and counting invocations.
    struct StubScraper {
        accepted: std::result::Result<Vec<&'static str>, ()>,
        calls: AtomicUsize,
    }

    impl StubScraper {
        fn returning(accepted: &[&'static str]) -> Arc<Self> {
            Arc::new(Self {
                accepted: Ok(accepted.to_vec()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                accepted: Err(()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PosterScraper for StubScraper {
        async fn scrape(&self, entry: &PlatformEntry) -> Result<PosterResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.accepted {
                Ok(urls) => Ok(PosterResult::from_accepted(
                    entry.name,
                    entry.language,
                    urls.iter().map(|s| s.to_string()).collect(),
                )),
                Err(()) => Err(BotError::Scrape("browser exploded".to_string())),
            }
        }
    }

    fn test_ctx(scraper: Arc<StubScraper>) -> AppContext {
        let config = Config {
            bot_token: "test-token".to_string(),
            owner_id: OWNER,
            base_url: "http://localhost:8080".to_string(),
            port: 8080,
            scraper: ScraperConfig::default(),
        };
        AppContext::with_scraper(config, scraper)
    }

    #[tokio::test]
    async fn test_unauthorized_platform_command_never_scrapes() {
        let scraper = StubScraper::returning(&["https://cdn/a.jpg"]);
        let ctx = test_ctx(scraper.clone());

        let reply = platform_reply(&ctx, 42, "netflix").await;
        assert_eq!(reply, Reply::Plain(replies::UNAUTHORIZED.to_string()));
        assert_eq!(scraper.calls(), 0);
    }

    #[tokio::test]
    async fn test_zee5_with_two_posters() {
        let scraper = StubScraper::returning(&["https://cdn/p1.jpg", "https://cdn/p2.jpg"]);
        let ctx = test_ctx(scraper.clone());

        let Reply::Html(text) = platform_reply(&ctx, OWNER, "zee5").await else {
            panic!("expected an HTML reply");
        };
        assert!(text.contains("ZEE5 Title"));
        assert!(text.contains("(2025) [Hindi]"));
        assert!(text.contains("<b>Poster</b>: https://cdn/p1.jpg"));
        assert!(text.contains("<b>Portrait</b>: https://cdn/p2.jpg"));
        assert!(!text.contains("<b>Cover</b>"));
        assert_eq!(scraper.calls(), 1);
    }

    #[tokio::test]
    async fn test_platform_with_no_qualifying_images() {
        let scraper = StubScraper::returning(&[]);
        let ctx = test_ctx(scraper);

        let reply = platform_reply(&ctx, OWNER, "hotstar").await;
        assert_eq!(reply, Reply::Plain(replies::NO_POSTERS.to_string()));
    }

    #[tokio::test]
    async fn test_scrape_failure_collapses_to_no_posters_notice() {
        let scraper = StubScraper::failing();
        let ctx = test_ctx(scraper.clone());

        let reply = platform_reply(&ctx, OWNER, "netflix").await;
        assert_eq!(reply, Reply::Plain(replies::NO_POSTERS.to_string()));
        assert_eq!(scraper.calls(), 1);
    }

    #[tokio::test]
    async fn test_scrape_links_filters_by_provider() {
        let ctx = test_ctx(StubScraper::returning(&[]));

        let reply =
            scrape_links_reply(&ctx, OWNER, "https://gofile.io/x https://example.com/y");
        let Reply::Html(text) = reply else {
            panic!("expected an HTML reply");
        };
        assert!(text.contains("<code>https://gofile.io/x</code>"));
        assert!(!text.contains("example.com"));
    }

    #[tokio::test]
    async fn test_scrape_links_usage_and_no_match_notices() {
        let ctx = test_ctx(StubScraper::returning(&[]));

        assert_eq!(
            scrape_links_reply(&ctx, OWNER, ""),
            Reply::Plain(replies::USAGE_SCRAPE.to_string())
        );
        assert_eq!(
            scrape_links_reply(&ctx, OWNER, "https://example.com/y"),
            Reply::Plain(replies::NO_VALID_LINKS.to_string())
        );
        assert_eq!(
            scrape_links_reply(&ctx, 42, "https://gofile.io/x"),
            Reply::Plain(replies::UNAUTHORIZED.to_string())
        );
    }

    #[tokio::test]
    async fn test_grant_and_revoke_replies() {
        let ctx = test_ctx(StubScraper::returning(&[]));

        assert_eq!(
            grant_reply(&ctx, OWNER, "42"),
            Reply::Plain("✅ Authorized 42".to_string())
        );
        assert_eq!(
            grant_reply(&ctx, OWNER, "42"),
            Reply::Plain(replies::ALREADY_AUTHORIZED.to_string())
        );
        assert_eq!(
            revoke_reply(&ctx, OWNER, "42"),
            Reply::Plain("🚫 Revoked 42".to_string())
        );
        assert_eq!(
            revoke_reply(&ctx, OWNER, "42"),
            Reply::Plain(replies::NOT_AUTHORIZED.to_string())
        );
    }

    #[tokio::test]
    async fn test_non_owner_admin_commands_are_gated() {
        let ctx = test_ctx(StubScraper::returning(&[]));
        ctx.access.authorize(OWNER, 42).unwrap();

        assert_eq!(
            grant_reply(&ctx, 42, "43"),
            Reply::Plain(replies::OWNER_ONLY.to_string())
        );
        assert_eq!(
            revoke_reply(&ctx, 42, "42"),
            Reply::Plain(replies::OWNER_ONLY.to_string())
        );
        assert_eq!(
            stats_reply(&ctx, 42),
            Reply::Plain(replies::OWNER_ONLY.to_string())
        );
        assert!(ctx.access.is_authorized(42));
    }

    #[tokio::test]
    async fn test_malformed_ids_are_usage_errors() {
        let ctx = test_ctx(StubScraper::returning(&[]));

        assert_eq!(
            grant_reply(&ctx, OWNER, "alice"),
            Reply::Plain(replies::USAGE_AUTHORIZE.to_string())
        );
        assert_eq!(
            revoke_reply(&ctx, OWNER, ""),
            Reply::Plain(replies::USAGE_UNAUTHORIZE.to_string())
        );
    }

    #[tokio::test]
    async fn test_owner_cannot_revoke_self() {
        let ctx = test_ctx(StubScraper::returning(&[]));
        assert_eq!(
            revoke_reply(&ctx, OWNER, &OWNER.to_string()),
            Reply::Plain(replies::OWNER_IMMUNE.to_string())
        );
        assert!(ctx.access.is_authorized(OWNER));
    }

    #[tokio::test]
    async fn test_stats_counts_members() {
        let ctx = test_ctx(StubScraper::returning(&[]));
        ctx.access.authorize(OWNER, 42).unwrap();

        assert_eq!(
            stats_reply(&ctx, OWNER),
            Reply::Plain("📊 Authorized users: 2".to_string())
        );
    }

    #[test]
    fn test_parse_user_id_accepts_first_token() {
        assert_eq!(parse_user_id("42"), Some(42));
        assert_eq!(parse_user_id("  42  extra"), Some(42));
    }

    #[test]
    fn test_parse_user_id_rejects_garbage() {
        assert_eq!(parse_user_id(""), None);
        assert_eq!(parse_user_id("alice"), None);
        assert_eq!(parse_user_id("12.5"), None);
    }
}
