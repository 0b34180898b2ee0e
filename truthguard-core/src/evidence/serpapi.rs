//! SerpAPI search source
//!
//! Google engine results via <https://serpapi.com/>. Highest-priority
//! evidence capability when `SERPAPI_KEY` is configured.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::EvidenceError;
use crate::types::{Claim, EvidenceItem, MAX_SOURCES};

use super::EvidenceSource;

const SERPAPI_URL: &str = "https://serpapi.com/search.json";
const SERPAPI_TIMEOUT: Duration = Duration::from_secs(10);

/// SerpAPI organic-results search
pub struct SerpApiSource {
    client: reqwest::Client,
    api_key: String,
}

impl SerpApiSource {
    pub fn new(api_key: String) -> Self {
        SerpApiSource {
            client: reqwest::Client::new(),
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<SerpApiResult>,
}

#[derive(Debug, Deserialize)]
struct SerpApiResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

#[async_trait]
impl EvidenceSource for SerpApiSource {
    fn name(&self) -> &'static str {
        "serpapi"
    }

    async fn fetch(&self, claim: &Claim) -> Result<Vec<EvidenceItem>, EvidenceError> {
        let response = self
            .client
            .get(SERPAPI_URL)
            .timeout(SERPAPI_TIMEOUT)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("q", claim.as_str()),
                ("engine", "google"),
                ("num", "8"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EvidenceError::Api(status.as_u16(), body));
        }

        let parsed: SerpApiResponse = response
            .json()
            .await
            .map_err(|e| EvidenceError::Parse(e.to_string()))?;

        Ok(parsed
            .organic_results
            .into_iter()
            .take(MAX_SOURCES)
            .map(|r| EvidenceItem {
                title: r.title,
                url: r.link,
                snippet: r.snippet,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parsing_tolerates_missing_fields() {
        let json = r#"{"organic_results":[{"title":"A"},{"link":"http://b.test","snippet":"s"}]}"#;
        let parsed: SerpApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.organic_results.len(), 2);
        assert_eq!(parsed.organic_results[0].title, "A");
        assert_eq!(parsed.organic_results[0].link, "");
        assert_eq!(parsed.organic_results[1].snippet, "s");
    }

    #[test]
    fn response_without_results_key_parses_empty() {
        let parsed: SerpApiResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.organic_results.is_empty());
    }
}
