//! Fact-check orchestration
//!
//! Turns raw input into a final result: claim normalization, sequential
//! evidence retrieval and reasoning, the confidence-floor override policy,
//! and final shaping. The orchestrator is infallible by contract; every
//! failure path inside the pipeline degrades to an `unverified` result
//! instead of surfacing to the caller.

use tracing::{info, warn};

use crate::config::ProviderConfig;
use crate::evidence::EvidenceProvider;
use crate::reasoning::ReasoningProvider;
use crate::types::{
    truncate_chars, DetectionMethod, FactCheckInput, FactCheckResult, Verdict, MAX_SOURCES,
};

/// Confidence below which a verdict is never allowed to stand
pub const CONFIDENCE_FLOOR: f64 = 20.0;

/// Confidence cap applied when the override policy triggers
const OVERRIDE_CONFIDENCE_CAP: f64 = 25.0;

const LOW_CONFIDENCE_SUMMARY: &str =
    "This claim cannot be confidently verified with current public sources.";
const LOW_CONFIDENCE_EXPLANATION: &str =
    "Insufficient evidence or conflicting information prevents a confident verdict.";

/// The fact-check decision pipeline
pub struct FactCheckOrchestrator {
    evidence: EvidenceProvider,
    reasoning: ReasoningProvider,
}

impl FactCheckOrchestrator {
    /// Build from explicit providers (test seam)
    pub fn new(evidence: EvidenceProvider, reasoning: ReasoningProvider) -> Self {
        FactCheckOrchestrator { evidence, reasoning }
    }

    /// Build both providers from configuration
    pub fn from_config(config: &ProviderConfig) -> Self {
        FactCheckOrchestrator {
            evidence: EvidenceProvider::from_config(config),
            reasoning: ReasoningProvider::from_config(config),
        }
    }

    /// Evidence source names in priority order, for health reporting
    pub fn evidence_sources(&self) -> Vec<&'static str> {
        self.evidence.source_names()
    }

    /// Reasoning source names in priority order, for health reporting
    pub fn reasoning_sources(&self) -> Vec<&'static str> {
        self.reasoning.source_names()
    }

    /// Run the full pipeline; never errors
    ///
    /// Evidence retrieval strictly precedes reasoning. The override policy
    /// runs unconditionally after judgment: low confidence or zero evidence
    /// forces `unverified` with capped confidence, whatever the reasoning
    /// capability said.
    pub async fn run(&self, input: &FactCheckInput) -> FactCheckResult {
        let Some(claim) = input.claim() else {
            warn!("Fact-check invoked with no usable input");
            return Self::internal_error_result();
        };

        let evidence = self.evidence.fetch(&claim).await;
        let judgment = self.reasoning.judge(&claim, &evidence).await;

        let mut verdict = judgment.verdict;
        let mut confidence = judgment.confidence;
        let mut summary = judgment.summary;
        let mut explanation = judgment.explanation;

        // Safety rail: an overconfident or hallucinated verdict must not
        // reach the user when evidentiary support is weak.
        if confidence < CONFIDENCE_FLOOR || evidence.is_empty() {
            verdict = Verdict::Unverified;
            confidence = confidence.min(OVERRIDE_CONFIDENCE_CAP);
            summary = LOW_CONFIDENCE_SUMMARY.to_string();
            explanation = LOW_CONFIDENCE_EXPLANATION.to_string();
        }

        let sources = evidence.into_iter().take(MAX_SOURCES).collect::<Vec<_>>();
        let credibility = confidence.clamp(0.0, 100.0).round() as u8;
        let detection_methods = if judgment.detection_methods.is_empty() {
            vec![DetectionMethod::WebSearch, DetectionMethod::LlmAnalysis]
        } else {
            judgment.detection_methods
        };
        if summary.trim().is_empty() {
            summary = truncate_chars(&explanation, 200).to_string();
        }

        info!(
            verdict = verdict.as_str(),
            credibility,
            sources = sources.len(),
            "Fact-check completed"
        );

        FactCheckResult {
            verdict,
            credibility,
            summary,
            explanation,
            sources,
            detection_methods,
        }
    }

    /// Result returned when the pipeline cannot even start
    fn internal_error_result() -> FactCheckResult {
        FactCheckResult {
            verdict: Verdict::Unverified,
            credibility: 0,
            summary: "Analysis failed due to an internal error or connectivity issue.".to_string(),
            explanation: "This claim cannot be verified at this time. Please try again later."
                .to_string(),
            sources: Vec::new(),
            detection_methods: vec![DetectionMethod::Error],
        }
    }
}
