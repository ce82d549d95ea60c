use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::prompt::{build_system_prompt, parse_enhancement};
use super::{EnhanceError, EnhanceOptions, EnhanceRequest, Enhancement, Enhancer};
use crate::config::EnhancerConfig;

/// Enhancement through an OpenAI-compatible chat completions endpoint
#[derive(Debug, Clone)]
pub struct OpenAiEnhancer {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

impl OpenAiEnhancer {
    pub fn new(config: &EnhancerConfig) -> Result<Self, EnhanceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Checks everything that can be rejected before spending a request
    fn validate(&self, request: &EnhanceRequest<'_>) -> Result<&str, EnhanceError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(EnhanceError::MissingApiKey)?;
        if !api_key.starts_with("sk-") {
            return Err(EnhanceError::InvalidApiKey);
        }
        if request.text.trim().is_empty() {
            return Err(EnhanceError::EmptyContent);
        }
        Ok(api_key)
    }

    /// Sends one chat completion and returns the assistant message text
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, EnhanceError> {
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "system", "content": prompt }],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|error| error.message);
            return Err(EnhanceError::Api(detail.unwrap_or_else(|| {
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )
            })));
        }

        let data: ChatResponse = response
            .json()
            .await
            .map_err(|_| EnhanceError::InvalidResponse)?;

        extract_message(data)
    }
}

fn extract_message(data: ChatResponse) -> Result<String, EnhanceError> {
    data.choices
        .and_then(|choices| choices.into_iter().next())
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or(EnhanceError::InvalidResponse)
}

impl Enhancer for OpenAiEnhancer {
    async fn enhance(
        &self,
        request: &EnhanceRequest<'_>,
        options: &EnhanceOptions,
    ) -> Result<Enhancement, EnhanceError> {
        let api_key = self.validate(request)?;
        if !options.any() {
            ::log::info!("No enhancement options selected, skipping AI call");
            return Ok(Enhancement::default());
        }

        let prompt = build_system_prompt(request, options);
        ::log::info!(
            "Requesting enhancement from {} with model {} ({} words)",
            self.endpoint,
            self.model,
            request.word_count()
        );

        let reply = self.complete(api_key, &prompt).await?;
        ::log::debug!("Enhancement reply: {} chars", reply.len());

        parse_enhancement(&reply, options)
    }
}
