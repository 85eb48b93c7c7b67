//! Hosting-provider link extraction for the `/scrape` command.

/// Providers whose links are worth relaying.
const KNOWN_PROVIDERS: &[&str] = &["gofile", "hubcloud", "pixeldrain", "gdflix"];

/// Keep only the arguments mentioning a known hosting provider.
///
/// This is pure substring matching against the raw arguments, in the order
/// given: no URL parsing, no validation, no deduplication.
pub fn filter_links<'a>(args: &'a [String]) -> Vec<&'a str> {
    args.iter()
        .map(String::as_str)
        .filter(|arg| KNOWN_PROVIDERS.iter().any(|p| arg.contains(p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(specs: &[&str]) -> Vec<String> {
        specs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_known_provider_links_are_kept() {
        let input = args(&["https://gofile.io/x", "https://example.com/y"]);
        assert_eq!(filter_links(&input), vec!["https://gofile.io/x"]);
    }

    #[test]
    fn test_all_four_providers_match() {
        let input = args(&[
            "https://gofile.io/d/abc",
            "https://hubcloud.day/file",
            "https://pixeldrain.com/u/xyz",
            "https://new.gdflix.net/file",
        ]);
        assert_eq!(filter_links(&input).len(), 4);
    }

    #[test]
    fn test_no_matches_yields_empty() {
        let input = args(&["https://example.com/a", "https://mega.nz/b"]);
        assert!(filter_links(&input).is_empty());
    }

    #[test]
    fn test_matching_is_substring_only_no_dedup() {
        // Bare provider mentions and repeats pass through untouched.
        let input = args(&["gofile", "gofile"]);
        assert_eq!(filter_links(&input), vec!["gofile", "gofile"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let input = args(&[
            "https://pixeldrain.com/1",
            "https://unrelated.tv/2",
            "https://gofile.io/3",
        ]);
        assert_eq!(
            filter_links(&input),
            vec!["https://pixeldrain.com/1", "https://gofile.io/3"]
        );
    }
}
