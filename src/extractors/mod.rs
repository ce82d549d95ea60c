pub mod headings;
pub mod images;
pub mod links;
pub mod locator;
pub mod metadata;
pub mod text;

#[cfg(test)]
mod tests;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::ExtractorConfig;
use crate::error::Error;
use crate::filter::{LinkFilter, NodeFilter};
use crate::results::PageContent;

/// The content extraction engine.
///
/// Holds only configuration; every call works on its own document snapshot
/// and returns a fresh [`PageContent`].
#[derive(Debug)]
pub struct Extractor {
    config: ExtractorConfig,
    node_filter: NodeFilter,
    link_filter: LinkFilter,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            config: ExtractorConfig::default(),
            node_filter: NodeFilter::default(),
            link_filter: LinkFilter::default(),
        }
    }
}

impl Extractor {
    /// Create an extractor, compiling the configured link exclude patterns
    pub fn new(config: ExtractorConfig) -> Result<Self, Error> {
        let node_filter = NodeFilter::new(&config);
        let link_filter = LinkFilter::new(&config)?;
        Ok(Self {
            config,
            node_filter,
            link_filter,
        })
    }

    /// Parses raw HTML and extracts from it
    pub fn extract(&self, html: &str, url: &Url) -> PageContent {
        let doc = Html::parse_document(html);
        self.extract_document(&doc, url)
    }

    /// Runs every stage over an already parsed document
    pub fn extract_document(&self, doc: &Html, url: &Url) -> PageContent {
        let base = document_base(doc, url);

        let root = match locator::find_main_content(doc, &self.config) {
            Some(main) => main,
            None => {
                ::log::debug!("No main content area found, falling back to body");
                body_or_root(doc)
            }
        };
        let text = text::extract_text(root, &self.node_filter);

        let headings = headings::collect_headings(doc);
        let links = links::collect_links(doc, &base, url, &self.link_filter, self.config.max_links);
        let images = images::collect_images(
            doc,
            &base,
            self.config.min_image_dimension,
            self.config.max_images,
        );
        let metadata = metadata::resolve_metadata(doc, &base);

        ::log::info!(
            "Extracted {} chars, {} headings, {} links, {} images from {}",
            text.len(),
            headings.len(),
            links.len(),
            images.len(),
            url
        );

        PageContent {
            title: document_title(doc),
            url: url.to_string(),
            domain: url.host_str().unwrap_or_default().to_string(),
            text,
            headings,
            links,
            images,
            metadata,
        }
    }
}

/// Parses a selector, logging and discarding invalid ones
pub(crate) fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            ::log::warn!("Ignoring invalid selector {:?}: {}", css, e);
            None
        }
    }
}

/// First element in document order matching `css`
pub(crate) fn select_first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = parse_selector(css)?;
    doc.select(&selector).next()
}

/// Full text content of an element, like the DOM's `textContent`
pub(crate) fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Collapses runs of whitespace to single spaces and trims
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// URL relative references resolve against: `<base href>` if present, else the page URL
pub(crate) fn document_base(doc: &Html, url: &Url) -> Url {
    select_first(doc, "base[href]")
        .and_then(|base| base.value().attr("href"))
        .and_then(|href| url.join(href.trim()).ok())
        .unwrap_or_else(|| url.clone())
}

fn body_or_root(doc: &Html) -> ElementRef<'_> {
    select_first(doc, "body").unwrap_or_else(|| doc.root_element())
}

fn document_title(doc: &Html) -> String {
    select_first(doc, "title")
        .map(|title| collapse_whitespace(&text_content(title)))
        .unwrap_or_default()
}
