/// A supported OTT platform: display name, homepage to scrape, and the
/// language tag shown in replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformEntry {
    pub name: &'static str,
    pub url: &'static str,
    pub language: &'static str,
}

/// Fixed command-name → platform table, built once at startup.
///
/// Adding a platform means adding a row here and redeploying; there is no
/// runtime mutation API.
#[derive(Debug, Clone)]
pub struct PlatformRegistry {
    entries: Vec<(&'static str, PlatformEntry)>,
}

const PLATFORMS: &[(&str, PlatformEntry)] = &[
    (
        "netflix",
        PlatformEntry {
            name: "Netflix",
            url: "https://www.netflix.com/in/browse/genre/34399",
            language: "Multi",
        },
    ),
    (
        "prime",
        PlatformEntry {
            name: "Prime Video",
            url: "https://www.primevideo.com/storefront/home",
            language: "Multi",
        },
    ),
    (
        "zee5",
        PlatformEntry {
            name: "ZEE5",
            url: "https://www.zee5.com/movies",
            language: "Hindi",
        },
    ),
    (
        "hotstar",
        PlatformEntry {
            name: "Hotstar",
            url: "https://www.hotstar.com/in/movies",
            language: "Hindi",
        },
    ),
    (
        "jiocinema",
        PlatformEntry {
            name: "JioCinema",
            url: "https://www.jiocinema.com/movies",
            language: "Hindi",
        },
    ),
    (
        "mx",
        PlatformEntry {
            name: "MX Player",
            url: "https://www.mxplayer.in/movies",
            language: "Hindi",
        },
    ),
    (
        "chaupal",
        PlatformEntry {
            name: "Chaupal",
            url: "https://www.chaupal.tv/movies",
            language: "Punjabi",
        },
    ),
    (
        "crunchyroll",
        PlatformEntry {
            name: "Crunchyroll",
            url: "https://www.crunchyroll.com/videos/anime",
            language: "Japanese",
        },
    ),
];

impl PlatformRegistry {
    pub fn new() -> Self {
        Self {
            entries: PLATFORMS.to_vec(),
        }
    }

    /// Look up a platform by its command name (e.g. `"zee5"`).
    pub fn lookup(&self, command: &str) -> Option<&PlatformEntry> {
        self.entries
            .iter()
            .find(|(cmd, _)| *cmd == command)
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::new()
    }
}
