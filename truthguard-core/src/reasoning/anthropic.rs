//! Anthropic free-text reasoning
//!
//! The messages API answers in prose; the verdict JSON object is located in
//! the text by [`crate::json_extract::extract_json_object`]. No object in
//! the text means this source falls through to the next one. An object that
//! is present but invalid JSON is a hard parse failure.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::ReasoningError;
use crate::json_extract::extract_json_object;
use crate::types::{Claim, DetectionMethod, EvidenceItem, Judgment};

use super::{ReasoningSource, VerdictPayload};

const ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const ANTHROPIC_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_TOKENS: u32 = 2000;

/// Anthropic messages-API reasoner
pub struct AnthropicReasoner {
    client: reqwest::Client,
    api_key: String,
}

impl AnthropicReasoner {
    pub fn new(api_key: String) -> Self {
        AnthropicReasoner {
            client: reqwest::Client::new(),
            api_key,
        }
    }
}

fn format_sources(evidence: &[EvidenceItem]) -> String {
    evidence
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            format!("{}. {} ({})\n   {}", idx + 1, item.title, item.url, item.snippet)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl ReasoningSource for AnthropicReasoner {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn judge(
        &self,
        claim: &Claim,
        evidence: &[EvidenceItem],
    ) -> Result<Judgment, ReasoningError> {
        let sources_text = format_sources(evidence);
        let prompt = format!(
            "As an expert fact-checker, analyze this claim using ONLY the provided sources. \
             Return JSON with: verdict (true/false/mostly_true/mostly_false/mixed/unverified), \
             credibility (0-100), summary, explanation, and evidence array.\n\nClaim: \"{}\"\n\nSources:\n{}",
            claim,
            if sources_text.is_empty() { "No sources found" } else { sources_text.as_str() },
        );

        let body = json!({
            "model": ANTHROPIC_MODEL,
            "max_tokens": MAX_TOKENS,
            "messages": [
                { "role": "user", "content": prompt },
            ],
        });

        let response = self
            .client
            .post(ANTHROPIC_URL)
            .timeout(ANTHROPIC_TIMEOUT)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReasoningError::Api(status.as_u16(), body));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ReasoningError::Parse(e.to_string()))?;

        let text = parsed
            .content
            .first()
            .map(|block| block.text.as_str())
            .unwrap_or_default();

        let object = extract_json_object(text).ok_or(ReasoningError::NoJson)?;

        let payload: VerdictPayload =
            serde_json::from_str(object).map_err(|e| ReasoningError::Parse(e.to_string()))?;

        Ok(payload.into_judgment(vec![
            DetectionMethod::WebSearch,
            DetectionMethod::AnthropicClaude,
        ]))
    }
}
