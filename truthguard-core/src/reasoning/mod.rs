//! Verdict reasoning
//!
//! A claim plus its evidence list goes to the highest-priority configured
//! reasoning capability: OpenAI (structured JSON output), then Anthropic
//! (free text with JSON extraction), then the always-available heuristic
//! reasoner. A source whose free-text response contains no JSON object falls
//! through to the next source; any other failure resolves to the
//! error-fallback judgment. The provider never errors.

mod anthropic;
mod heuristic;
mod openai;

pub use anthropic::AnthropicReasoner;
pub use heuristic::HeuristicReasoner;
pub use openai::OpenAiReasoner;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::error::ReasoningError;
use crate::types::{Claim, DetectionMethod, EvidenceCitation, EvidenceItem, Judgment, Verdict};

/// One backing reasoning capability
#[async_trait]
pub trait ReasoningSource: Send + Sync {
    /// Stable source name for logging and health reporting
    fn name(&self) -> &'static str;

    /// Judge a claim against its evidence
    async fn judge(
        &self,
        claim: &Claim,
        evidence: &[EvidenceItem],
    ) -> Result<Judgment, ReasoningError>;
}

/// Priority-ordered reasoning over interchangeable sources
pub struct ReasoningProvider {
    sources: Vec<Arc<dyn ReasoningSource>>,
}

impl ReasoningProvider {
    /// Build from an explicit source list, highest priority first
    pub fn new(sources: Vec<Arc<dyn ReasoningSource>>) -> Self {
        ReasoningProvider { sources }
    }

    /// Instantiate the configured sources in priority order
    pub fn from_config(config: &ProviderConfig) -> Self {
        let mut sources: Vec<Arc<dyn ReasoningSource>> = Vec::new();

        if let Some(key) = &config.openai_api_key {
            sources.push(Arc::new(OpenAiReasoner::new(
                key.clone(),
                config.openai_model.clone(),
            )));
        }
        if let Some(key) = &config.anthropic_api_key {
            sources.push(Arc::new(AnthropicReasoner::new(key.clone())));
        }
        sources.push(Arc::new(HeuristicReasoner::new()));

        ReasoningProvider::new(sources)
    }

    /// Source names in priority order, for health reporting
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Judge a claim; never errors
    ///
    /// Walks the source list in priority order. [`ReasoningError::NoJson`]
    /// falls through to the next source; any other failure resolves to
    /// [`Judgment::error_fallback`].
    pub async fn judge(&self, claim: &Claim, evidence: &[EvidenceItem]) -> Judgment {
        for source in &self.sources {
            match source.judge(claim, evidence).await {
                Ok(judgment) => {
                    debug!(
                        source = source.name(),
                        verdict = judgment.verdict.as_str(),
                        confidence = judgment.confidence,
                        "Judgment produced"
                    );
                    return judgment;
                }
                Err(ReasoningError::NoJson) => {
                    warn!(source = source.name(), "No JSON object in response, trying next source");
                    continue;
                }
                Err(err) => {
                    warn!(source = source.name(), error = %err, "Reasoning failed, using error fallback");
                    return Judgment::error_fallback();
                }
            }
        }

        // Unreachable when the list is terminated by the heuristic reasoner
        warn!("All reasoning sources fell through");
        Judgment::error_fallback()
    }
}

// ============================================================================
// Shared vendor payload
// ============================================================================

/// JSON payload both vendor reasoning capabilities are asked to emit
///
/// Every field is optional: vendors routinely drop fields, and the mapping
/// below supplies the documented defaults rather than failing.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct VerdictPayload {
    #[serde(default)]
    verdict: Option<String>,
    #[serde(default)]
    credibility: Option<f64>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    evidence: Vec<EvidenceCitation>,
}

impl VerdictPayload {
    /// Normalize into a [`Judgment`]: verdict coerced into the closed label
    /// set, confidence clamped to [0,100], explanation falling back to the
    /// summary when absent.
    pub(crate) fn into_judgment(self, detection_methods: Vec<DetectionMethod>) -> Judgment {
        let verdict = self
            .verdict
            .as_deref()
            .map(Verdict::from_label)
            .unwrap_or(Verdict::Unverified);
        let confidence = self.credibility.unwrap_or(0.0).clamp(0.0, 100.0);
        let summary = self
            .summary
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "Analysis completed".to_string());
        let explanation = self
            .explanation
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| summary.clone());

        Judgment {
            verdict,
            confidence,
            summary,
            explanation,
            evidence: self.evidence,
            detection_methods,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FactCheckInput;

    fn claim() -> Claim {
        FactCheckInput {
            input_text: Some("some claim".to_string()),
            ..Default::default()
        }
        .claim()
        .unwrap()
    }

    struct FailingReasoner;

    #[async_trait]
    impl ReasoningSource for FailingReasoner {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn judge(
            &self,
            _claim: &Claim,
            _evidence: &[EvidenceItem],
        ) -> Result<Judgment, ReasoningError> {
            Err(ReasoningError::Network("timed out".to_string()))
        }
    }

    struct NoJsonReasoner;

    #[async_trait]
    impl ReasoningSource for NoJsonReasoner {
        fn name(&self) -> &'static str {
            "no_json"
        }

        async fn judge(
            &self,
            _claim: &Claim,
            _evidence: &[EvidenceItem],
        ) -> Result<Judgment, ReasoningError> {
            Err(ReasoningError::NoJson)
        }
    }

    struct FixedReasoner(Verdict, f64);

    #[async_trait]
    impl ReasoningSource for FixedReasoner {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn judge(
            &self,
            _claim: &Claim,
            _evidence: &[EvidenceItem],
        ) -> Result<Judgment, ReasoningError> {
            Ok(Judgment {
                verdict: self.0,
                confidence: self.1,
                summary: "s".to_string(),
                explanation: "e".to_string(),
                evidence: vec![],
                detection_methods: vec![DetectionMethod::WebSearch],
            })
        }
    }

    #[tokio::test]
    async fn hard_failure_resolves_to_error_fallback() {
        let provider = ReasoningProvider::new(vec![Arc::new(FailingReasoner)]);
        let judgment = provider.judge(&claim(), &[]).await;
        assert_eq!(judgment.verdict, Verdict::Unverified);
        assert_eq!(judgment.confidence, 0.0);
        assert_eq!(judgment.detection_methods, vec![DetectionMethod::ErrorFallback]);
    }

    #[tokio::test]
    async fn no_json_falls_through_to_next_source() {
        let provider = ReasoningProvider::new(vec![
            Arc::new(NoJsonReasoner),
            Arc::new(FixedReasoner(Verdict::True, 90.0)),
        ]);
        let judgment = provider.judge(&claim(), &[]).await;
        assert_eq!(judgment.verdict, Verdict::True);
        assert_eq!(judgment.confidence, 90.0);
    }

    #[tokio::test]
    async fn network_failure_does_not_fall_through() {
        let provider = ReasoningProvider::new(vec![
            Arc::new(FailingReasoner),
            Arc::new(FixedReasoner(Verdict::True, 90.0)),
        ]);
        let judgment = provider.judge(&claim(), &[]).await;
        assert_eq!(judgment.verdict, Verdict::Unverified);
        assert_eq!(judgment.detection_methods, vec![DetectionMethod::ErrorFallback]);
    }

    #[test]
    fn from_config_without_credentials_is_heuristic_only() {
        let provider = ReasoningProvider::from_config(&ProviderConfig::default());
        assert_eq!(provider.source_names(), vec!["heuristic"]);
    }

    #[test]
    fn from_config_orders_openai_before_anthropic() {
        let config = ProviderConfig {
            openai_api_key: Some("k1".to_string()),
            anthropic_api_key: Some("k2".to_string()),
            ..Default::default()
        };
        let provider = ReasoningProvider::from_config(&config);
        assert_eq!(provider.source_names(), vec!["openai", "anthropic", "heuristic"]);
    }

    #[test]
    fn payload_mapping_applies_defaults_and_clamps() {
        let payload: VerdictPayload =
            serde_json::from_str(r#"{"verdict":"nonsense","credibility":140}"#).unwrap();
        let judgment = payload.into_judgment(vec![DetectionMethod::WebSearch]);
        assert_eq!(judgment.verdict, Verdict::Unverified);
        assert_eq!(judgment.confidence, 100.0);
        assert_eq!(judgment.summary, "Analysis completed");
        assert_eq!(judgment.explanation, "Analysis completed");

        let payload: VerdictPayload =
            serde_json::from_str(r#"{"verdict":"true","credibility":-5,"summary":"ok"}"#).unwrap();
        let judgment = payload.into_judgment(vec![]);
        assert_eq!(judgment.verdict, Verdict::True);
        assert_eq!(judgment.confidence, 0.0);
        assert_eq!(judgment.explanation, "ok");
    }
}
