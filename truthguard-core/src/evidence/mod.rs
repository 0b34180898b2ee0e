//! Evidence retrieval
//!
//! A claim goes to exactly one backing search capability per invocation,
//! chosen by priority order at construction time: SerpAPI, then Perplexity,
//! then Google Custom Search, then the always-available offline fixture.
//! Any failure in the selected source resolves to an empty evidence list so
//! the downstream zero-evidence policy applies; the provider never errors.

mod google;
mod offline;
mod perplexity;
mod serpapi;

pub use google::GoogleSearchSource;
pub use offline::OfflineFixtureSource;
pub use perplexity::PerplexitySource;
pub use serpapi::SerpApiSource;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::error::EvidenceError;
use crate::types::{Claim, EvidenceItem, MAX_SOURCES};

/// One backing search capability
#[async_trait]
pub trait EvidenceSource: Send + Sync {
    /// Stable source name for logging and health reporting
    fn name(&self) -> &'static str;

    /// Retrieve candidate evidence for a claim
    async fn fetch(&self, claim: &Claim) -> Result<Vec<EvidenceItem>, EvidenceError>;
}

/// Priority-ordered evidence retrieval over interchangeable sources
pub struct EvidenceProvider {
    sources: Vec<Arc<dyn EvidenceSource>>,
}

impl EvidenceProvider {
    /// Build from an explicit source list, highest priority first
    ///
    /// The list must be non-empty; [`EvidenceProvider::from_config`] always
    /// terminates it with the offline fixture source.
    pub fn new(sources: Vec<Arc<dyn EvidenceSource>>) -> Self {
        EvidenceProvider { sources }
    }

    /// Instantiate the configured sources in priority order
    pub fn from_config(config: &ProviderConfig) -> Self {
        let mut sources: Vec<Arc<dyn EvidenceSource>> = Vec::new();

        if let Some(key) = &config.serpapi_key {
            sources.push(Arc::new(SerpApiSource::new(key.clone())));
        }
        if let Some(key) = &config.perplexity_api_key {
            sources.push(Arc::new(PerplexitySource::new(key.clone())));
        }
        if let (Some(key), Some(cx)) = (&config.google_api_key, &config.google_cx) {
            sources.push(Arc::new(GoogleSearchSource::new(key.clone(), cx.clone())));
        }
        sources.push(Arc::new(OfflineFixtureSource::new()));

        EvidenceProvider::new(sources)
    }

    /// Source names in priority order, for health reporting
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Fetch evidence for a claim; never errors
    ///
    /// Uses the highest-priority source. A source failure is recovered to an
    /// empty list, which downstream policy turns into an unverified verdict.
    /// Results are truncated to [`MAX_SOURCES`] items, source order preserved.
    pub async fn fetch(&self, claim: &Claim) -> Vec<EvidenceItem> {
        let Some(source) = self.sources.first() else {
            warn!("No evidence sources configured");
            return Vec::new();
        };

        match source.fetch(claim).await {
            Ok(mut items) => {
                items.truncate(MAX_SOURCES);
                debug!(source = source.name(), count = items.len(), "Evidence retrieved");
                items
            }
            Err(err) => {
                warn!(source = source.name(), error = %err, "Evidence retrieval failed, returning no evidence");
                Vec::new()
            }
        }
    }
}
