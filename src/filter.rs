use regex::Regex;
use scraper::node::{Element, Node};
use std::collections::HashSet;
use url::Url;

use crate::config::ExtractorConfig;

/// Schemes that never produce a followable link
const EXCLUDED_SCHEMES: [&str; 2] = ["javascript", "mailto"];

/// Block-level tags that anchor a paragraph break in the text walk
pub const BLOCK_TAGS: [&str; 10] = ["p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "br"];

/// The two node kinds the text walk cares about
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    Text(&'a str),
    Element(&'a Element),
}

impl<'a> NodeKind<'a> {
    /// Classifies a raw tree node; comments, doctypes and the like yield `None`
    pub fn of(node: &'a Node) -> Option<Self> {
        match node {
            Node::Text(text) => Some(NodeKind::Text(&**text)),
            Node::Element(element) => Some(NodeKind::Element(element)),
            _ => None,
        }
    }
}

/// Decision for one node during the filtered walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Visit the node and its children
    Accept,
    /// Drop the node and everything below it
    Reject,
    /// Emit nothing for the node but still visit its children
    Skip,
}

/// Rules deciding which parts of a subtree contribute text
#[derive(Debug, Clone)]
pub struct NodeFilter {
    rejected_tags: HashSet<String>,
    rejected_classes: HashSet<String>,
}

impl Default for NodeFilter {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default())
    }
}

impl NodeFilter {
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            rejected_tags: config
                .rejected_tags
                .iter()
                .map(|t| t.to_ascii_lowercase())
                .collect(),
            rejected_classes: config.rejected_classes.iter().cloned().collect(),
        }
    }

    /// Pure traversal decision; rejection rules take precedence over acceptance
    pub fn classify(&self, kind: &NodeKind<'_>) -> Traversal {
        match kind {
            NodeKind::Text(_) => Traversal::Accept,
            NodeKind::Element(element) => {
                let tag = element.name();
                if self.rejected_tags.contains(tag)
                    || element
                        .classes()
                        .any(|class| self.rejected_classes.contains(class))
                {
                    Traversal::Reject
                } else if BLOCK_TAGS.contains(&tag) {
                    Traversal::Accept
                } else {
                    Traversal::Skip
                }
            }
        }
    }
}

/// URL rules for harvested links
#[derive(Debug, Default)]
pub struct LinkFilter {
    exclude_regexes: Vec<Regex>,
}

impl LinkFilter {
    /// Create a link filter, compiling the configured exclude patterns
    pub fn new(config: &ExtractorConfig) -> Result<Self, regex::Error> {
        let mut exclude_regexes = Vec::with_capacity(config.link_exclude_patterns.len());
        for pattern in &config.link_exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self { exclude_regexes })
    }

    /// Determine if a resolved link should be kept
    pub fn should_keep(&self, url: &Url) -> bool {
        if EXCLUDED_SCHEMES.contains(&url.scheme()) {
            return false;
        }

        let url_str = url.as_str();
        !self.exclude_regexes.iter().any(|regex| regex.is_match(url_str))
    }

    /// A link is internal when its host equals the page host
    pub fn is_internal(&self, url: &Url, page_url: &Url) -> bool {
        match (url.host_str(), page_url.host_str()) {
            (Some(host), Some(page_host)) => host.eq_ignore_ascii_case(page_host),
            _ => false,
        }
    }
}
