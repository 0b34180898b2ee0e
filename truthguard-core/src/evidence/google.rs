//! Google Custom Search source
//!
//! Lowest-priority configured capability; needs both an API key and a
//! custom search engine id.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::EvidenceError;
use crate::types::{Claim, EvidenceItem, MAX_SOURCES};

use super::EvidenceSource;

const GOOGLE_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";
const GOOGLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Google Custom Search
pub struct GoogleSearchSource {
    client: reqwest::Client,
    api_key: String,
    cx: String,
}

impl GoogleSearchSource {
    pub fn new(api_key: String, cx: String) -> Self {
        GoogleSearchSource {
            client: reqwest::Client::new(),
            api_key,
            cx,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GoogleSearchResponse {
    #[serde(default)]
    items: Vec<GoogleSearchItem>,
}

#[derive(Debug, Deserialize)]
struct GoogleSearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

#[async_trait]
impl EvidenceSource for GoogleSearchSource {
    fn name(&self) -> &'static str {
        "google_custom_search"
    }

    async fn fetch(&self, claim: &Claim) -> Result<Vec<EvidenceItem>, EvidenceError> {
        let response = self
            .client
            .get(GOOGLE_SEARCH_URL)
            .timeout(GOOGLE_TIMEOUT)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.cx.as_str()),
                ("q", claim.as_str()),
                ("num", "8"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EvidenceError::Api(status.as_u16(), body));
        }

        let parsed: GoogleSearchResponse = response
            .json()
            .await
            .map_err(|e| EvidenceError::Parse(e.to_string()))?;

        Ok(parsed
            .items
            .into_iter()
            .take(MAX_SOURCES)
            .map(|item| EvidenceItem {
                title: item.title,
                url: item.link,
                snippet: item.snippet,
            })
            .collect())
    }
}
