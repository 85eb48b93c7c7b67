use scraper::{Html, Selector};

/// Extract poster candidate URLs from rendered page markup.
///
/// Candidates are every `<img>` source, in document order, that is an
/// absolute `http` URL and does not mention `webp` anywhere in the source
/// string. The webp exclusion is crude on purpose: the format is known to
/// trip the OCR path, and matching the substring is how the candidates are
/// culled whether it appears as an extension or a query parameter.
pub fn poster_candidates(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let img = Selector::parse("img").expect("img selector is valid");

    document
        .select(&img)
        .filter_map(|el| el.value().attr("src"))
        .filter(|src| src.starts_with("http") && !src.contains("webp"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_in_document_order() {
        let html = r#"
            <html><body>
                <img src="https://cdn.example/a.jpg">
                <img src="https://cdn.example/b.png">
                <img src="https://cdn.example/c.jpg">
            </body></html>
        "#;
        assert_eq!(
            poster_candidates(html),
            vec![
                "https://cdn.example/a.jpg",
                "https://cdn.example/b.png",
                "https://cdn.example/c.jpg",
            ]
        );
    }

    #[test]
    fn test_relative_and_data_urls_are_skipped() {
        let html = r#"
            <img src="/assets/logo.png">
            <img src="data:image/png;base64,AAAA">
            <img src="https://cdn.example/ok.jpg">
        "#;
        assert_eq!(poster_candidates(html), vec!["https://cdn.example/ok.jpg"]);
    }

    #[test]
    fn test_webp_sources_are_excluded() {
        let html = r#"
            <img src="https://cdn.example/poster.webp">
            <img src="https://cdn.example/poster.jpg?format=webp">
            <img src="https://cdn.example/poster.jpg">
        "#;
        assert_eq!(
            poster_candidates(html),
            vec!["https://cdn.example/poster.jpg"]
        );
    }

    #[test]
    fn test_img_without_src_is_skipped() {
        let html = r#"<img data-src="https://cdn.example/lazy.jpg"><img src="https://cdn.example/x.jpg">"#;
        assert_eq!(poster_candidates(html), vec!["https://cdn.example/x.jpg"]);
    }

    #[test]
    fn test_empty_page_yields_no_candidates() {
        assert!(poster_candidates("<html><body></body></html>").is_empty());
    }
}
