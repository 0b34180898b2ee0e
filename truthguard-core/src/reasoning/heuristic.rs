//! Rule-based heuristic reasoner
//!
//! Always-available terminal reasoning source. Evaluates a fixed keyword
//! decision table against the lower-cased concatenation of the evidence
//! snippets and the lower-cased claim. The row order is a policy choice, not
//! a principled classifier: debunk terms outrank verification terms, which
//! outrank mixed-signal terms, then claim-shape rows. Changing the order
//! changes behavior on overlapping keyword sets, so it stays fixed.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ReasoningError;
use crate::types::{
    truncate_chars, Claim, DetectionMethod, EvidenceCitation, EvidenceItem, Judgment, Verdict,
};

use super::ReasoningSource;

const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Max evidence items turned into citations
const MAX_CITATIONS: usize = 5;

/// Citation reason length, in characters of the snippet
const REASON_CHARS: usize = 100;

/// Snippet terms indicating the claim has been debunked
const DEBUNK_TERMS: &[&str] = &["debunk", "false", "misleading", "hoax"];

/// Snippet terms indicating the claim has been verified
const VERIFY_TERMS: &[&str] = &["verified", "confirm", "accurate", "true"];

/// Snippet terms indicating mixed or inconclusive evidence
const MIXED_TERMS: &[&str] = &["partially", "mixed", "unclear"];

/// Claim terms suggesting a scientific claim with source backing
const SCIENCE_TERMS: &[&str] = &["scientists", "research", "study", "published"];

/// Claim terms typical of sensational claims
const SENSATIONAL_TERMS: &[&str] = &["cure", "miracle", "shocking", "secret"];

/// Deterministic rule-based reasoner
pub struct HeuristicReasoner {
    latency: Duration,
}

impl HeuristicReasoner {
    pub fn new() -> Self {
        HeuristicReasoner {
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the artificial latency; tests use `Duration::ZERO`
    pub fn with_latency(latency: Duration) -> Self {
        HeuristicReasoner { latency }
    }
}

impl Default for HeuristicReasoner {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| haystack.contains(term))
}

/// Evaluate the decision table; pure function of claim and evidence
pub fn evaluate(claim: &Claim, evidence: &[EvidenceItem]) -> Judgment {
    // Row 1: no evidence short-circuits the rest of the table
    if evidence.is_empty() {
        return Judgment {
            verdict: Verdict::Unverified,
            confidence: 0.0,
            summary: "Not yet confirmed - insufficient sources available.".to_string(),
            explanation: "This claim cannot be confidently verified with current public sources."
                .to_string(),
            evidence: Vec::new(),
            detection_methods: vec![DetectionMethod::WebSearch],
        };
    }

    let snippets = evidence
        .iter()
        .map(|item| item.snippet.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let claim_lower = claim.as_str().to_lowercase();

    let (verdict, confidence, explanation) = if contains_any(&snippets, DEBUNK_TERMS) {
        (
            Verdict::False,
            75.0,
            "Multiple sources indicate this claim is false or misleading.",
        )
    } else if contains_any(&snippets, VERIFY_TERMS) {
        (
            Verdict::True,
            80.0,
            "This claim has been verified by multiple reputable sources.",
        )
    } else if contains_any(&snippets, MIXED_TERMS) {
        (
            Verdict::Mixed,
            50.0,
            "Evidence is mixed - some aspects may be true while others are not.",
        )
    } else if contains_any(&claim_lower, SCIENCE_TERMS) {
        (
            Verdict::MostlyTrue,
            70.0,
            "This appears to be a scientific claim with credible backing from sources.",
        )
    } else if contains_any(&claim_lower, SENSATIONAL_TERMS) {
        (
            Verdict::MostlyFalse,
            30.0,
            "Sensational claims like this are often false or exaggerated, and sources do not support it.",
        )
    } else {
        (
            Verdict::Unverified,
            20.0,
            "This claim cannot be confidently verified with current public sources.",
        )
    };

    let citations = evidence
        .iter()
        .take(MAX_CITATIONS)
        .map(|item| EvidenceCitation {
            source_title: item.title.clone(),
            source_url: item.url.clone(),
            reason: truncate_chars(&item.snippet, REASON_CHARS).to_string(),
        })
        .collect();

    Judgment {
        verdict,
        confidence,
        summary: truncate_chars(explanation, 200).to_string(),
        explanation: explanation.to_string(),
        evidence: citations,
        detection_methods: vec![DetectionMethod::WebSearch, DetectionMethod::HeuristicAnalysis],
    }
}

#[async_trait]
impl ReasoningSource for HeuristicReasoner {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn judge(
        &self,
        claim: &Claim,
        evidence: &[EvidenceItem],
    ) -> Result<Judgment, ReasoningError> {
        tokio::time::sleep(self.latency).await;
        Ok(evaluate(claim, evidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FactCheckInput;

    fn claim(text: &str) -> Claim {
        FactCheckInput {
            input_text: Some(text.to_string()),
            ..Default::default()
        }
        .claim()
        .unwrap()
    }

    fn item_with_snippet(snippet: &str) -> EvidenceItem {
        EvidenceItem {
            title: "Title".to_string(),
            url: "http://e.test".to_string(),
            snippet: snippet.to_string(),
        }
    }

    #[test]
    fn empty_evidence_short_circuits_to_unverified_zero() {
        let judgment = evaluate(&claim("scientists found water is wet"), &[]);
        assert_eq!(judgment.verdict, Verdict::Unverified);
        assert_eq!(judgment.confidence, 0.0);
        assert!(judgment.evidence.is_empty());
        assert_eq!(judgment.detection_methods, vec![DetectionMethod::WebSearch]);
        assert!(judgment.explanation.contains("cannot be confidently verified"));
    }

    #[test]
    fn debunk_terms_yield_false_75() {
        let judgment = evaluate(
            &claim("the moon is cheese"),
            &[item_with_snippet("This story was thoroughly debunked last year.")],
        );
        assert_eq!(judgment.verdict, Verdict::False);
        assert_eq!(judgment.confidence, 75.0);
    }

    #[test]
    fn verify_terms_yield_true_80() {
        let judgment = evaluate(
            &claim("the river froze"),
            &[item_with_snippet("Officials confirm the report.")],
        );
        assert_eq!(judgment.verdict, Verdict::True);
        assert_eq!(judgment.confidence, 80.0);
    }

    #[test]
    fn mixed_terms_yield_mixed_50() {
        let judgment = evaluate(
            &claim("the river froze"),
            &[item_with_snippet("Reports are unclear on the details.")],
        );
        assert_eq!(judgment.verdict, Verdict::Mixed);
        assert_eq!(judgment.confidence, 50.0);
    }

    #[test]
    fn science_claim_terms_yield_mostly_true_70() {
        let judgment = evaluate(
            &claim("Scientists published a new study on vaccines"),
            &[item_with_snippet("Coverage of this topic exists across several outlets.")],
        );
        assert_eq!(judgment.verdict, Verdict::MostlyTrue);
        assert_eq!(judgment.confidence, 70.0);
        assert_eq!(
            judgment.detection_methods,
            vec![DetectionMethod::WebSearch, DetectionMethod::HeuristicAnalysis]
        );
    }

    #[test]
    fn sensational_claim_terms_yield_mostly_false_30() {
        let judgment = evaluate(
            &claim("Shocking secret miracle cure revealed"),
            &[item_with_snippet("A report on this topic.")],
        );
        assert_eq!(judgment.verdict, Verdict::MostlyFalse);
        assert_eq!(judgment.confidence, 30.0);
    }

    #[test]
    fn nothing_matches_yields_unverified_20() {
        let judgment = evaluate(
            &claim("the river froze"),
            &[item_with_snippet("A report on this topic.")],
        );
        assert_eq!(judgment.verdict, Verdict::Unverified);
        assert_eq!(judgment.confidence, 20.0);
    }

    #[test]
    fn snippet_rows_outrank_claim_rows() {
        // Claim matches the science row, snippet matches the debunk row;
        // the debunk row is checked first and wins.
        let judgment = evaluate(
            &claim("Scientists published a new study on vaccines"),
            &[item_with_snippet("The study was exposed as a hoax.")],
        );
        assert_eq!(judgment.verdict, Verdict::False);
        assert_eq!(judgment.confidence, 75.0);
    }

    #[test]
    fn debunk_row_outranks_verify_row() {
        let judgment = evaluate(
            &claim("anything"),
            &[item_with_snippet("Some outlets confirm it, others call it misleading.")],
        );
        assert_eq!(judgment.verdict, Verdict::False);
    }

    #[test]
    fn citations_cap_at_five_with_truncated_reasons() {
        let long_snippet = "z".repeat(150);
        let evidence: Vec<EvidenceItem> = (0..7).map(|_| item_with_snippet(&long_snippet)).collect();
        let judgment = evaluate(&claim("the river froze"), &evidence);
        assert_eq!(judgment.evidence.len(), 5);
        assert_eq!(judgment.evidence[0].reason.chars().count(), 100);
    }

    #[test]
    fn summary_is_explanation_prefix() {
        let judgment = evaluate(
            &claim("the river froze"),
            &[item_with_snippet("A report on this topic.")],
        );
        assert!(judgment.explanation.starts_with(&judgment.summary));
    }
}
