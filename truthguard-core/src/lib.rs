//! # TruthGuard Core
//!
//! The fact-check decision pipeline:
//! - Claim normalization from text/URL/image input
//! - Evidence retrieval over priority-ordered, interchangeable search sources
//! - Verdict reasoning over priority-ordered LLM sources with a rule-based
//!   fallback
//! - The confidence-floor override policy and final result shaping
//!
//! No HTTP server code and no persistence live here; the gateway crate calls
//! [`FactCheckOrchestrator::run`] and shapes the response.

pub mod config;
pub mod error;
pub mod evidence;
pub mod json_extract;
pub mod orchestrator;
pub mod reasoning;
pub mod types;

pub use config::ProviderConfig;
pub use error::{EvidenceError, ReasoningError};
pub use orchestrator::FactCheckOrchestrator;
pub use types::{
    Claim, DetectionMethod, EvidenceCitation, EvidenceItem, FactCheckInput, FactCheckResult,
    Judgment, Verdict,
};
