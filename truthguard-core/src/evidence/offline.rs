//! Offline evidence fixture
//!
//! Always-available terminal source so the pipeline is fully testable and
//! demoable with no external capability configured. Returns a deterministic
//! three-item list templated from the claim, after a small artificial delay
//! emulating search latency. Snippet texts are deliberately neutral with
//! respect to the heuristic keyword table so they classify nothing by
//! themselves.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::EvidenceError;
use crate::types::{truncate_chars, Claim, EvidenceItem};

use super::EvidenceSource;

const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Length of the claim excerpt embedded in fixture titles
const TITLE_EXCERPT_CHARS: usize = 60;

/// Deterministic offline evidence source
pub struct OfflineFixtureSource {
    latency: Duration,
}

impl OfflineFixtureSource {
    pub fn new() -> Self {
        OfflineFixtureSource {
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the artificial latency; tests use `Duration::ZERO`
    pub fn with_latency(latency: Duration) -> Self {
        OfflineFixtureSource { latency }
    }
}

impl Default for OfflineFixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EvidenceSource for OfflineFixtureSource {
    fn name(&self) -> &'static str {
        "offline_fixture"
    }

    async fn fetch(&self, claim: &Claim) -> Result<Vec<EvidenceItem>, EvidenceError> {
        tokio::time::sleep(self.latency).await;

        let excerpt = truncate_chars(claim.as_str(), TITLE_EXCERPT_CHARS);

        Ok(vec![
            EvidenceItem {
                title: format!("Fact Check: {}", excerpt),
                url: "https://example-factcheck.org/article1".to_string(),
                snippet: "Coverage of this topic exists across several independent outlets; see the full report for details.".to_string(),
            },
            EvidenceItem {
                title: format!("Verification Report: {}", excerpt),
                url: "https://verified-news.org/report".to_string(),
                snippet: "This item has been cross-referenced with official records by our editorial team.".to_string(),
            },
            EvidenceItem {
                title: format!("Analysis: {}", excerpt),
                url: "https://fact-check.org/analysis".to_string(),
                snippet: "Evidence from multiple independent sources relates to this claim.".to_string(),
            },
        ])
    }
}
