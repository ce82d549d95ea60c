use scraper::Html;
use std::collections::HashSet;
use url::Url;

use crate::extractors::{parse_selector, text_content};
use crate::filter::LinkFilter;
use crate::results::LinkRef;

/// Harvests anchors with resolvable URLs and visible text.
///
/// Hrefs resolve against `base`; `internal` compares hosts with `page_url`.
/// The first occurrence of each URL is kept and the list stops at `max_links`.
pub fn collect_links(
    doc: &Html,
    base: &Url,
    page_url: &Url,
    filter: &LinkFilter,
    max_links: usize,
) -> Vec<LinkRef> {
    let Some(selector) = parse_selector("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for anchor in doc.select(&selector) {
        if links.len() >= max_links {
            break;
        }

        let text = text_content(anchor).trim().to_string();
        if text.is_empty() {
            continue;
        }

        let Some(url) = anchor
            .value()
            .attr("href")
            .and_then(|href| base.join(href.trim()).ok())
        else {
            continue;
        };

        if !filter.should_keep(&url) {
            ::log::trace!("Link filter rejected: {}", url);
            continue;
        }

        let url_str = url.to_string();
        if !seen.insert(url_str.clone()) {
            continue;
        }

        links.push(LinkRef {
            text,
            internal: filter.is_internal(&url, page_url),
            url: url_str,
        });
    }

    ::log::debug!("Collected {} unique links", links.len());
    links
}
