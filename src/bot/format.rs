use crate::domain::PosterResult;

/// Fixed reply strings, kept verbatim so behavior is copy-exact across
/// deployments.
pub mod replies {
    pub const UNAUTHORIZED: &str = "🚫 Unauthorized user.";
    pub const OWNER_ONLY: &str = "🚫 Owner only.";
    pub const ALREADY_AUTHORIZED: &str = "⚠️ Already authorized.";
    pub const NOT_AUTHORIZED: &str = "❌ Not authorized.";
    pub const OWNER_IMMUNE: &str = "🚫 Owner cannot be revoked.";
    pub const USAGE_AUTHORIZE: &str = "❗ Usage: /authorize <user_id>";
    pub const USAGE_UNAUTHORIZE: &str = "❗ Usage: /unauthorize <user_id>";
    pub const USAGE_SCRAPE: &str = "❗ Usage: /scrape <link1> <link2>";
    pub const NO_POSTERS: &str = "❌ No posters with text found.";
    pub const NO_VALID_LINKS: &str = "❌ No valid links found.";
    pub const SCRAPE_FAILED: &str = "❌ Failed to fetch posters. Try again later.";
}

const FOOTER: &str = "\n🚀 Powered by @PBX1_BOTS";

/// HTML reply for a successful poster scrape. Only non-empty slots get a
/// line.
pub fn poster_message(result: &PosterResult) -> String {
    let mut msg = format!(
        "🎬 <b>{}</b> ({}) [{}]\n\n",
        result.title, result.year, result.language
    );

    if let Some(url) = &result.poster {
        msg.push_str(&format!("🖼 <b>Poster</b>: {}\n", url));
    }
    if let Some(url) = &result.portrait {
        msg.push_str(&format!("📱 <b>Portrait</b>: {}\n", url));
    }
    if let Some(url) = &result.cover {
        msg.push_str(&format!("🖼 <b>Cover</b>: {}\n", url));
    }

    msg.push_str(FOOTER);
    msg
}

/// HTML reply for `/scrape`, one annotated line per kept link.
pub fn links_message(links: &[&str]) -> String {
    let mut msg = String::from("🧩 Extracted Links:\n");
    for url in links {
        msg.push_str(&format!("✅ <code>{}</code>\n", url));
    }
    msg
}

/// Reply for `/authlist`, one identifier per line.
pub fn authlist_message(users: &[i64]) -> String {
    let lines = users
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    format!("🔐 Authorized users:\n{}", lines)
}
