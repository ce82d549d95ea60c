use scraper::Html;

use crate::extractors::{parse_selector, text_content};
use crate::results::Heading;

/// Collects `h1`..`h6` across the whole document in document order
pub fn collect_headings(doc: &Html) -> Vec<Heading> {
    let Some(selector) = parse_selector("h1, h2, h3, h4, h5, h6") else {
        return Vec::new();
    };

    doc.select(&selector)
        .filter_map(|element| {
            let text = text_content(element).trim().to_string();
            if text.is_empty() {
                return None;
            }
            let level = element.value().name()[1..].parse::<u8>().ok()?;
            let id = element
                .value()
                .id()
                .filter(|id| !id.is_empty())
                .map(str::to_string);
            Some(Heading { level, text, id })
        })
        .collect()
}
