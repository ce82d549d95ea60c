use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enhance::Enhancement;

/// Everything extracted from one page snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    /// Document title, whitespace collapsed
    pub title: String,

    /// Navigation URL of the page
    pub url: String,

    /// Host part of the URL (empty for host-less URLs such as `file://`)
    pub domain: String,

    /// Main text, paragraphs separated by one blank line
    pub text: String,

    /// Document-wide heading outline
    pub headings: Vec<Heading>,

    /// Outbound links, unique by URL
    pub links: Vec<LinkRef>,

    /// Content images above the size threshold
    pub images: Vec<ImageRef>,

    /// Meta tags plus `canonical`, `publishDate` and `author`
    pub metadata: BTreeMap<String, String>,
}

/// A heading element flattened into the outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub id: Option<String>,
}

/// An anchor with a resolved absolute URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    pub text: String,
    pub url: String,
    /// Same host as the page
    pub internal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

/// Extraction result together with whatever the enhancement step produced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedPage {
    pub content: PageContent,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhancement: Option<Enhancement>,
}
