pub mod file;
pub mod web;

use url::Url;

/// One rendered document and the URL it was loaded from
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub html: String,
    pub url: Url,
}

/// Where the document comes from
#[derive(Debug, Clone)]
pub enum SourceType {
    /// Live page rendered through WebDriver
    Web(String),
    /// Saved HTML file, optionally with the URL it was saved from
    File {
        path: String,
        base_url: Option<String>,
    },
}
