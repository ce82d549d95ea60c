use crate::config::ExtractorConfig;
use crate::extractors::locator::find_main_content;
use scraper::Html;

#[cfg(test)]
mod locator_tests {
    use super::*;

    fn long_text(len: usize) -> String {
        "x".repeat(len)
    }

    fn located(html: &str) -> Option<String> {
        let doc = Html::parse_document(html);
        find_main_content(&doc, &ExtractorConfig::default()).map(|el| {
            let mut label = el.value().name().to_string();
            if let Some(id) = el.value().id() {
                label.push('#');
                label.push_str(id);
            }
            label
        })
    }

    #[test]
    fn test_main_is_selected_over_body() {
        let html = format!(
            "<body><div>Header stuff</div><main><p>{}</p></main><div>Footer</div></body>",
            long_text(150)
        );
        assert_eq!(located(&html).as_deref(), Some("main"));
    }

    #[test]
    fn test_threshold_is_strictly_greater_than_100() {
        let exactly = format!("<body><main>  {}  </main></body>", long_text(100));
        assert_eq!(located(&exactly), None);

        let above = format!("<body><main>{}</main></body>", long_text(101));
        assert_eq!(located(&above).as_deref(), Some("main"));
    }

    #[test]
    fn test_threshold_counts_characters_not_bytes() {
        // 60 two-byte characters are 120 bytes but only 60 characters
        let html = format!("<body><main>{}</main></body>", "é".repeat(60));
        assert_eq!(located(&html), None);
    }

    #[test]
    fn test_no_candidates_returns_none() {
        let html = format!("<body><div><p>{}</p></div></body>", long_text(500));
        assert_eq!(located(&html), None);
    }

    #[test]
    fn test_selector_priority_beats_document_order() {
        let html = format!(
            "<body><article>{a}</article><div class=\"content\">{a}</div><main>{a}</main></body>",
            a = long_text(200)
        );
        assert_eq!(located(&html).as_deref(), Some("main"));
    }

    #[test]
    fn test_short_candidate_falls_through_to_next_selector() {
        let html = format!(
            "<body><main>too short</main><article>{}</article></body>",
            long_text(200)
        );
        assert_eq!(located(&html).as_deref(), Some("article"));
    }

    #[test]
    fn test_pinned_selector_order() {
        let config = ExtractorConfig::default();
        assert_eq!(
            config.main_selectors,
            vec![
                "main",
                "article",
                "[role=\"main\"]",
                ".main-content",
                ".content",
                ".post-content",
                ".entry-content",
                ".article-content",
                "#main",
                "#content",
            ]
        );
        assert_eq!(config.min_main_text_chars, 100);
    }

    #[test]
    fn test_role_main_before_class_conventions() {
        let html = format!(
            "<body><div class=\"main-content\" id=\"by-class\">{a}</div><div role=\"main\" id=\"by-role\">{a}</div></body>",
            a = long_text(200)
        );
        assert_eq!(located(&html).as_deref(), Some("div#by-role"));
    }

    #[test]
    fn test_class_conventions_before_id_conventions() {
        let html = format!(
            "<body><div id=\"main\">{a}</div><section class=\"entry-content\" id=\"entry\">{a}</section></body>",
            a = long_text(200)
        );
        assert_eq!(located(&html).as_deref(), Some("section#entry"));
    }

    #[test]
    fn test_id_content_is_last_resort() {
        let html = format!("<body><div id=\"content\">{}</div></body>", long_text(200));
        assert_eq!(located(&html).as_deref(), Some("div#content"));
    }

    #[test]
    fn test_only_first_match_per_selector_is_considered() {
        let html = format!(
            "<body><article>short</article><article>{}</article></body>",
            long_text(200)
        );
        assert_eq!(located(&html), None);
    }

    #[test]
    fn test_custom_selectors_and_threshold() {
        let config = ExtractorConfig {
            main_selectors: vec!["[".to_string(), ".story".to_string()],
            min_main_text_chars: 10,
            ..ExtractorConfig::default()
        };
        let doc = Html::parse_document("<body><main>ignored main text here</main><div class=\"story\">eleven chars</div></body>");
        let found = find_main_content(&doc, &config).unwrap();
        assert_eq!(found.value().attr("class"), Some("story"));
    }
}
