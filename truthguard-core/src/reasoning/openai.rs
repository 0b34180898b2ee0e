//! OpenAI structured-output reasoning
//!
//! Chat completions with `response_format: json_object`, so the model is
//! contractually bound to return a single JSON object matching the verdict
//! schema. An unparseable body is a hard failure, not a fall-through.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::ReasoningError;
use crate::types::{Claim, DetectionMethod, EvidenceItem, Judgment};

use super::{ReasoningSource, VerdictPayload};

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const OPENAI_TIMEOUT: Duration = Duration::from_secs(30);

const SYSTEM_PROMPT: &str = r#"You are an expert fact-checker. Analyze the claim using ONLY the provided search results.
Output your analysis as valid JSON following this exact schema:
{
  "verdict": "true" | "false" | "mostly_true" | "mostly_false" | "mixed" | "unverified",
  "credibility": 0-100,
  "summary": "2-3 sentence summary",
  "explanation": "Detailed explanation with evidence",
  "evidence": [
    {
      "sourceTitle": "...",
      "sourceUrl": "...",
      "reason": "Why this source supports the verdict"
    }
  ]
}

Rules:
- Use "unverified" if evidence is weak (credibility < 20) or conflicting
- Use "mixed" if evidence is partially supportive
- Use "mostly_true" or "mostly_false" if largely true/false but some nuances
- Be conservative - prefer "unverified" over guessing
- Base credibility ONLY on provided sources"#;

/// OpenAI chat-completions reasoner
pub struct OpenAiReasoner {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiReasoner {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        OpenAiReasoner {
            client: reqwest::Client::new(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

fn format_sources(evidence: &[EvidenceItem]) -> String {
    evidence
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            format!("{}. {}\n   URL: {}\n   {}", idx + 1, item.title, item.url, item.snippet)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: String,
}

#[async_trait]
impl ReasoningSource for OpenAiReasoner {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn judge(
        &self,
        claim: &Claim,
        evidence: &[EvidenceItem],
    ) -> Result<Judgment, ReasoningError> {
        let sources_text = format_sources(evidence);
        let user_content = format!(
            "Claim to verify: \"{}\"\n\nSearch Results:\n{}\n\nProvide your fact-check analysis as JSON:",
            claim,
            if sources_text.is_empty() { "No sources found" } else { sources_text.as_str() },
        );

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": user_content },
            ],
            "response_format": { "type": "json_object" },
            "temperature": 0.3,
        });

        let response = self
            .client
            .post(OPENAI_URL)
            .timeout(OPENAI_TIMEOUT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReasoningError::Api(status.as_u16(), body));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ReasoningError::Parse(e.to_string()))?;

        let content = parsed
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| ReasoningError::Parse("response contained no choices".to_string()))?;

        let payload: VerdictPayload =
            serde_json::from_str(content).map_err(|e| ReasoningError::Parse(e.to_string()))?;

        Ok(payload.into_judgment(vec![DetectionMethod::WebSearch, DetectionMethod::OpenaiLlm]))
    }
}
