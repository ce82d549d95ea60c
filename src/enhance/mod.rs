//! AI enhancement of extracted pages.
//!
//! The service is opaque to the extraction engine: it receives the page's
//! title, URL, domain and text plus the requested features and returns the
//! enhancement fields, or an [`EnhanceError`] that callers surface verbatim.

mod error;
pub mod openai;
pub mod prompt;

pub use error::EnhanceError;
pub use openai::OpenAiEnhancer;

use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::results::PageContent;

/// Which enhancements to ask for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceOptions {
    #[serde(default)]
    pub summarize: bool,
    #[serde(default)]
    pub expand_context: bool,
    #[serde(default)]
    pub validate_claims: bool,
}

impl EnhanceOptions {
    pub fn any(&self) -> bool {
        self.summarize || self.expand_context || self.validate_claims
    }
}

/// The slice of [`PageContent`] the enhancement service sees
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EnhanceRequest<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub domain: &'a str,
    pub text: &'a str,
}

impl<'a> From<&'a PageContent> for EnhanceRequest<'a> {
    fn from(content: &'a PageContent) -> Self {
        Self {
            title: &content.title,
            url: &content.url,
            domain: &content.domain,
            text: &content.text,
        }
    }
}

impl EnhanceRequest<'_> {
    /// Approximate word count as reported to the model
    pub fn word_count(&self) -> usize {
        self.text.split(' ').count()
    }
}

/// Verdict on a single claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Verified,
    Questionable,
    False,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimValidation {
    pub claim: String,
    pub status: ClaimStatus,
    pub reasoning: String,
}

/// Fields produced by the enhancement service; only requested ones are set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enhancement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Vec<ClaimValidation>>,
}

/// An enhancement service
pub trait Enhancer {
    fn enhance(
        &self,
        request: &EnhanceRequest<'_>,
        options: &EnhanceOptions,
    ) -> impl Future<Output = Result<Enhancement, EnhanceError>> + Send;
}
