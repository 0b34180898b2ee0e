//! Perplexity online-model search source
//!
//! Asks a Perplexity online model for sources verifying the claim and turns
//! the response citation URLs into synthetic evidence items. The model's
//! prose answer is deliberately ignored; only the citations carry weight
//! here, reasoning happens downstream.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::EvidenceError;
use crate::types::{Claim, EvidenceItem, MAX_SOURCES};

use super::EvidenceSource;

const PERPLEXITY_URL: &str = "https://api.perplexity.ai/chat/completions";
const PERPLEXITY_MODEL: &str = "llama-3.1-sonar-large-128k-online";
const PERPLEXITY_TIMEOUT: Duration = Duration::from_secs(15);

/// Perplexity citations search
pub struct PerplexitySource {
    client: reqwest::Client,
    api_key: String,
}

impl PerplexitySource {
    pub fn new(api_key: String) -> Self {
        PerplexitySource {
            client: reqwest::Client::new(),
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PerplexityResponse {
    #[serde(default)]
    citations: Vec<String>,
}

#[async_trait]
impl EvidenceSource for PerplexitySource {
    fn name(&self) -> &'static str {
        "perplexity"
    }

    async fn fetch(&self, claim: &Claim) -> Result<Vec<EvidenceItem>, EvidenceError> {
        let body = json!({
            "model": PERPLEXITY_MODEL,
            "messages": [
                {
                    "role": "system",
                    "content": "You are a fact-checking assistant. Provide search results for verifying claims.",
                },
                {
                    "role": "user",
                    "content": format!("Find reliable sources to verify this claim: {}", claim),
                },
            ],
        });

        let response = self
            .client
            .post(PERPLEXITY_URL)
            .timeout(PERPLEXITY_TIMEOUT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EvidenceError::Api(status.as_u16(), body));
        }

        let parsed: PerplexityResponse = response
            .json()
            .await
            .map_err(|e| EvidenceError::Parse(e.to_string()))?;

        Ok(parsed
            .citations
            .into_iter()
            .take(MAX_SOURCES)
            .enumerate()
            .map(|(idx, url)| EvidenceItem {
                title: format!("Source {}", idx + 1),
                url,
                snippet: "Cited source for verification".to_string(),
            })
            .collect())
    }
}
