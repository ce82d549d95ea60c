use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Error;

/// Tuning for the extraction engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Candidate selectors for the main content area, highest priority first
    #[serde(default = "default_main_selectors")]
    pub main_selectors: Vec<String>,

    /// A candidate is accepted only when its trimmed text is longer than this
    #[serde(default = "default_min_main_text_chars")]
    pub min_main_text_chars: usize,

    /// Maximum number of links kept after de-duplication
    #[serde(default = "default_max_links")]
    pub max_links: usize,

    /// Maximum number of images kept
    #[serde(default = "default_max_images")]
    pub max_images: usize,

    /// Images must be strictly larger than this in both dimensions
    #[serde(default = "default_min_image_dimension")]
    pub min_image_dimension: u32,

    /// Tags whose whole subtree is dropped from the text
    #[serde(default = "default_rejected_tags")]
    pub rejected_tags: Vec<String>,

    /// Class tokens whose whole subtree is dropped from the text
    #[serde(default = "default_rejected_classes")]
    pub rejected_classes: Vec<String>,

    /// Regex patterns for link URLs to leave out
    #[serde(default)]
    pub link_exclude_patterns: Vec<String>,
}

/// Settings for the AI enhancement service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancerConfig {
    /// Chat completions endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name sent with each request
    #[serde(default = "default_model")]
    pub model: String,

    /// API key (the `OPENAI_API_KEY` environment variable takes precedence)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub timeout_secs: u64,
}

/// Settings for capturing a rendered page through WebDriver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSourceConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Upper bound on navigation plus snapshot
    #[serde(default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    /// Extra wait after navigation for client-side rendering
    #[serde(default)]
    pub settle_millis: u64,
}

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub extractor: ExtractorConfig,

    #[serde(default)]
    pub enhancer: EnhancerConfig,

    #[serde(default)]
    pub web: WebSourceConfig,
}

impl AppConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Apply `OPENAI_API_KEY` and `WEBDRIVER_URL` overrides from the environment
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                self.enhancer.api_key = Some(key);
            }
        }
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.web.webdriver_url = webdriver_url;
            }
        }
        self
    }
}

fn default_main_selectors() -> Vec<String> {
    [
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
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_min_main_text_chars() -> usize {
    100
}

fn default_max_links() -> usize {
    50
}

fn default_max_images() -> usize {
    20
}

fn default_min_image_dimension() -> u32 {
    50
}

fn default_rejected_tags() -> Vec<String> {
    ["script", "style", "nav", "footer", "aside", "noscript", "template"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_rejected_classes() -> Vec<String> {
    ["ad", "advertisement", "sidebar"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_temperature() -> f32 {
    0.3
}

fn default_request_timeout() -> u64 {
    60
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_page_timeout() -> u64 {
    45
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            main_selectors: default_main_selectors(),
            min_main_text_chars: default_min_main_text_chars(),
            max_links: default_max_links(),
            max_images: default_max_images(),
            min_image_dimension: default_min_image_dimension(),
            rejected_tags: default_rejected_tags(),
            rejected_classes: default_rejected_classes(),
            link_exclude_patterns: Vec::new(),
        }
    }
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for WebSourceConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            page_timeout_secs: default_page_timeout(),
            settle_millis: 0,
        }
    }
}
