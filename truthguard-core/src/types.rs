//! Core data model for the fact-check pipeline
//!
//! All values here are created fresh per request and flow one way through the
//! pipeline: input → claim → evidence → judgment → result. Nothing is mutated
//! after handoff to the next stage.

use serde::{Deserialize, Serialize};

/// Maximum length of a direct-text claim, in characters
pub const MAX_CLAIM_CHARS: usize = 500;

/// Maximum number of evidence items carried through the pipeline
pub const MAX_SOURCES: usize = 8;

// ============================================================================
// Verdict
// ============================================================================

/// Closed set of truthfulness labels
///
/// No other value is ever valid; anything unrecognized coming back from an
/// external reasoning capability is coerced to `Unverified` via
/// [`Verdict::from_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    True,
    False,
    MostlyTrue,
    MostlyFalse,
    Mixed,
    Unverified,
}

impl Verdict {
    /// Lenient coercion from an arbitrary provider string
    ///
    /// Case-insensitive, whitespace-tolerant; unknown or empty labels map to
    /// `Unverified`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "true" => Verdict::True,
            "false" => Verdict::False,
            "mostly_true" => Verdict::MostlyTrue,
            "mostly_false" => Verdict::MostlyFalse,
            "mixed" => Verdict::Mixed,
            _ => Verdict::Unverified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::True => "true",
            Verdict::False => "false",
            Verdict::MostlyTrue => "mostly_true",
            Verdict::MostlyFalse => "mostly_false",
            Verdict::Mixed => "mixed",
            Verdict::Unverified => "unverified",
        }
    }
}

// ============================================================================
// Detection methods
// ============================================================================

/// Provenance tags identifying which capability/path produced a judgment
///
/// Observability taxonomy only; never decision-affecting downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    WebSearch,
    OpenaiLlm,
    AnthropicClaude,
    HeuristicAnalysis,
    LlmAnalysis,
    ErrorFallback,
    Error,
}

// ============================================================================
// Evidence
// ============================================================================

/// One retrieved source used as support for a judgment
///
/// Produced only by the evidence provider; read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// A reasoning capability's reference to an evidence item
///
/// References, not owns, the underlying [`EvidenceItem`]. Field names follow
/// the JSON schema the reasoning capabilities are asked to emit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceCitation {
    #[serde(default)]
    pub source_title: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub reason: String,
}

// ============================================================================
// Judgment (raw, pre-policy)
// ============================================================================

/// Raw verdict output from a reasoning capability, before the override policy
#[derive(Debug, Clone, PartialEq)]
pub struct Judgment {
    pub verdict: Verdict,
    /// Confidence in [0,100], clamped at the reasoning layer
    pub confidence: f64,
    pub summary: String,
    pub explanation: String,
    pub evidence: Vec<EvidenceCitation>,
    pub detection_methods: Vec<DetectionMethod>,
}

impl Judgment {
    /// Judgment substituted when a reasoning capability fails outright
    /// (network error, API error, unparseable structured output)
    pub fn error_fallback() -> Self {
        Judgment {
            verdict: Verdict::Unverified,
            confidence: 0.0,
            summary: "Analysis failed due to an internal error or connectivity issue.".to_string(),
            explanation: "This claim cannot be verified at this time due to technical limitations."
                .to_string(),
            evidence: Vec::new(),
            detection_methods: vec![DetectionMethod::ErrorFallback],
        }
    }
}

// ============================================================================
// Input and claim
// ============================================================================

/// Raw fact-check request input
///
/// At least one field must be meaningfully present; the caller validates this
/// and the orchestrator defends internally.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckInput {
    #[serde(default)]
    pub input_text: Option<String>,
    #[serde(default)]
    pub input_url: Option<String>,
    #[serde(default)]
    pub input_image_url: Option<String>,
}

impl FactCheckInput {
    /// True when no field carries a non-blank value
    pub fn is_empty(&self) -> bool {
        self.claim().is_none()
    }

    /// Build the canonical claim, first non-blank field wins: text → url → image
    pub fn claim(&self) -> Option<Claim> {
        if let Some(text) = non_blank(&self.input_text) {
            return Some(Claim::from_text(text));
        }
        if let Some(url) = non_blank(&self.input_url) {
            return Some(Claim::from_url(url));
        }
        if let Some(url) = non_blank(&self.input_image_url) {
            return Some(Claim::from_image_url(url));
        }
        None
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Normalized text describing what is being fact-checked
///
/// Constructed exactly once per fact-check invocation, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim(String);

impl Claim {
    /// Direct text input: trimmed, truncated to [`MAX_CLAIM_CHARS`] characters
    fn from_text(text: &str) -> Self {
        Claim(truncate_chars(text.trim(), MAX_CLAIM_CHARS).to_string())
    }

    /// URL input: synthesized verification sentence embedding the URL
    fn from_url(url: &str) -> Self {
        Claim(format!("Verify the content at this URL: {}", url))
    }

    /// Image input: synthesized sentence asking for authenticity verification
    fn from_image_url(url: &str) -> Self {
        Claim(format!(
            "Verify claims made about this image: {}. Check if the image is authentic and if any claims about it are accurate.",
            url
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Truncate to at most `max` characters on a char boundary
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// ============================================================================
// Final result (post-policy)
// ============================================================================

/// The only entity exposed to external collaborators
///
/// Invariants: `credibility` is an integer in [0,100]; `verdict` is
/// `Unverified` whenever `credibility < 20` or `sources` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckResult {
    pub verdict: Verdict,
    pub credibility: u8,
    pub summary: String,
    pub explanation: String,
    /// At most [`MAX_SOURCES`] items, source order preserved
    pub sources: Vec<EvidenceItem>,
    pub detection_methods: Vec<DetectionMethod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_serializes_as_snake_case_labels() {
        assert_eq!(serde_json::to_string(&Verdict::True).unwrap(), "\"true\"");
        assert_eq!(
            serde_json::to_string(&Verdict::MostlyFalse).unwrap(),
            "\"mostly_false\""
        );
        assert_eq!(
            serde_json::to_string(&Verdict::Unverified).unwrap(),
            "\"unverified\""
        );
    }

    #[test]
    fn verdict_lenient_parsing_coerces_unknown_to_unverified() {
        assert_eq!(Verdict::from_label("true"), Verdict::True);
        assert_eq!(Verdict::from_label(" Mostly_True "), Verdict::MostlyTrue);
        assert_eq!(Verdict::from_label("FALSE"), Verdict::False);
        assert_eq!(Verdict::from_label("probably"), Verdict::Unverified);
        assert_eq!(Verdict::from_label(""), Verdict::Unverified);
    }

    #[test]
    fn detection_method_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&DetectionMethod::OpenaiLlm).unwrap(),
            "\"openai_llm\""
        );
        assert_eq!(
            serde_json::to_string(&DetectionMethod::AnthropicClaude).unwrap(),
            "\"anthropic_claude\""
        );
        assert_eq!(
            serde_json::to_string(&DetectionMethod::Error).unwrap(),
            "\"error\""
        );
    }

    #[test]
    fn claim_from_text_is_trimmed() {
        let input = FactCheckInput {
            input_text: Some("  The sky is green.  ".to_string()),
            ..Default::default()
        };
        assert_eq!(input.claim().unwrap().as_str(), "The sky is green.");
    }

    #[test]
    fn claim_from_text_truncates_to_500_chars() {
        let input = FactCheckInput {
            input_text: Some("x".repeat(600)),
            ..Default::default()
        };
        assert_eq!(input.claim().unwrap().as_str().chars().count(), 500);
    }

    #[test]
    fn claim_truncation_respects_multibyte_boundaries() {
        let input = FactCheckInput {
            input_text: Some("é".repeat(510)),
            ..Default::default()
        };
        let claim = input.claim().unwrap();
        assert_eq!(claim.as_str().chars().count(), 500);
    }

    #[test]
    fn claim_from_url_embeds_the_literal_url() {
        let input = FactCheckInput {
            input_url: Some("http://x.test".to_string()),
            ..Default::default()
        };
        let claim = input.claim().unwrap();
        assert!(claim.as_str().contains("http://x.test"));
    }

    #[test]
    fn claim_from_image_url_mentions_authenticity() {
        let input = FactCheckInput {
            input_image_url: Some("http://img.test/a.png".to_string()),
            ..Default::default()
        };
        let claim = input.claim().unwrap();
        assert!(claim.as_str().contains("http://img.test/a.png"));
        assert!(claim.as_str().contains("authentic"));
    }

    #[test]
    fn claim_priority_is_text_then_url_then_image() {
        let input = FactCheckInput {
            input_text: Some("a claim".to_string()),
            input_url: Some("http://x.test".to_string()),
            input_image_url: Some("http://img.test".to_string()),
        };
        assert_eq!(input.claim().unwrap().as_str(), "a claim");

        let input = FactCheckInput {
            input_text: Some("   ".to_string()),
            input_url: Some("http://x.test".to_string()),
            input_image_url: None,
        };
        // Whitespace-only text counts as absent
        assert!(input.claim().unwrap().as_str().contains("http://x.test"));
    }

    #[test]
    fn empty_input_yields_no_claim() {
        assert!(FactCheckInput::default().claim().is_none());
        assert!(FactCheckInput::default().is_empty());
    }

    #[test]
    fn input_deserializes_from_camel_case() {
        let input: FactCheckInput =
            serde_json::from_str(r#"{"inputText":"hi","inputImageUrl":"http://i.test"}"#).unwrap();
        assert_eq!(input.input_text.as_deref(), Some("hi"));
        assert_eq!(input.input_image_url.as_deref(), Some("http://i.test"));
        assert!(input.input_url.is_none());
    }

    #[test]
    fn result_serializes_with_camel_case_methods_key() {
        let result = FactCheckResult {
            verdict: Verdict::Mixed,
            credibility: 50,
            summary: "s".to_string(),
            explanation: "e".to_string(),
            sources: vec![],
            detection_methods: vec![DetectionMethod::WebSearch],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["verdict"], "mixed");
        assert_eq!(json["credibility"], 50);
        assert_eq!(json["detectionMethods"][0], "web_search");
    }

    #[test]
    fn citation_tolerates_missing_fields() {
        let citation: EvidenceCitation =
            serde_json::from_str(r#"{"sourceTitle":"t"}"#).unwrap();
        assert_eq!(citation.source_title, "t");
        assert_eq!(citation.source_url, "");
        assert_eq!(citation.reason, "");
    }
}
