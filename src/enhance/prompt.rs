use serde::Deserialize;
use std::str::FromStr;

use super::{ClaimStatus, ClaimValidation, EnhanceError, EnhanceOptions, EnhanceRequest, Enhancement};

/// Builds the system prompt asking for the enabled enhancements as JSON
pub fn build_system_prompt(request: &EnhanceRequest<'_>, options: &EnhanceOptions) -> String {
    let mut prompt = format!(
        "You are an AI content enhancement assistant. Your task is to analyze web content and \
         provide enhancements based on the user's requirements.\n\
         \n\
         Original content metadata:\n\
         - Title: {}\n\
         - URL: {}\n\
         - Domain: {}\n\
         - Word count: ~{} words\n\
         \n\
         Content text:\n\
         {}\n\
         \n\
         Please provide responses in JSON format with the following structure:\n\
         {{",
        request.title,
        request.url,
        request.domain,
        request.word_count(),
        request.text
    );

    if options.summarize {
        prompt.push_str(
            "\n  \"summary\": \"A concise, well-structured summary of the main points\",",
        );
    }

    if options.expand_context {
        prompt.push_str(
            "\n  \"context\": \"Additional context, background information, and related insights \
             that would help readers better understand the topic\",",
        );
    }

    if options.validate_claims {
        prompt.push_str(
            "\n  \"validation\": [\n    {\n      \"claim\": \"A specific claim from the content\",\n      \
             \"status\": \"verified/questionable/false\",\n      \
             \"reasoning\": \"Explanation of the validation\"\n    }\n  ]",
        );
    }

    prompt.push_str(
        "\n}\n\
         \n\
         Requirements:\n\
         - Be factual and objective\n\
         - Provide high-quality, accurate information\n\
         - If validating claims, focus on the most significant or questionable assertions\n\
         - Keep summaries concise but comprehensive\n\
         - Make context additions genuinely valuable and educational",
    );

    prompt
}

#[derive(Debug, Deserialize)]
struct RawEnhancement {
    summary: Option<String>,
    context: Option<String>,
    validation: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct RawClaim {
    claim: String,
    status: String,
    #[serde(default)]
    reasoning: Option<String>,
}

impl FromStr for ClaimStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verified" => Ok(ClaimStatus::Verified),
            "questionable" => Ok(ClaimStatus::Questionable),
            "false" => Ok(ClaimStatus::False),
            other => Err(format!("unknown claim status {other:?}")),
        }
    }
}

/// Parses the model's reply, keeping only fields for enabled options.
///
/// A surrounding Markdown code fence is tolerated. Malformed claims and
/// claims with a status outside verified/questionable/false are dropped
/// without affecting the other fields.
pub fn parse_enhancement(reply: &str, options: &EnhanceOptions) -> Result<Enhancement, EnhanceError> {
    let raw: RawEnhancement = serde_json::from_str(strip_code_fence(reply))?;

    let validation = raw
        .validation
        .filter(|_| options.validate_claims)
        .map(|claims| claims.into_iter().filter_map(parse_claim).collect());

    Ok(Enhancement {
        summary: raw.summary.filter(|s| options.summarize && !s.is_empty()),
        context: raw.context.filter(|c| options.expand_context && !c.is_empty()),
        validation,
    })
}

fn parse_claim(value: serde_json::Value) -> Option<ClaimValidation> {
    let raw: RawClaim = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(e) => {
            ::log::warn!("Dropping malformed claim: {}", e);
            return None;
        }
    };

    match raw.status.parse::<ClaimStatus>() {
        Ok(status) => Some(ClaimValidation {
            claim: raw.claim,
            status,
            reasoning: raw.reasoning.unwrap_or_default(),
        }),
        Err(e) => {
            ::log::warn!("Dropping claim {:?}: {}", raw.claim, e);
            None
        }
    }
}

fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // drop an info string such as `json`
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.strip_suffix("```").unwrap_or(body).trim()
}
