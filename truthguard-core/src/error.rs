//! Error types for the fact-check pipeline
//!
//! Both error families stay inside the pipeline: the evidence provider
//! recovers to an empty list, the reasoning provider recovers to the
//! error-fallback judgment. Neither crosses the orchestrator boundary.

use thiserror::Error;

/// Evidence-retrieval failure
#[derive(Debug, Error)]
pub enum EvidenceError {
    /// Network communication error (includes timeouts)
    #[error("Network error: {0}")]
    Network(String),

    /// Search capability returned a non-success status
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Failed to parse the capability response
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for EvidenceError {
    fn from(err: reqwest::Error) -> Self {
        EvidenceError::Network(err.to_string())
    }
}

/// Reasoning failure
#[derive(Debug, Error)]
pub enum ReasoningError {
    /// Network communication error (includes timeouts)
    #[error("Network error: {0}")]
    Network(String),

    /// Reasoning capability returned a non-success status
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Structured output could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Free-text response contained no JSON object; the only variant that
    /// falls through to the next reasoning source
    #[error("No JSON object found in response text")]
    NoJson,
}

impl From<reqwest::Error> for ReasoningError {
    fn from(err: reqwest::Error) -> Self {
        ReasoningError::Network(err.to_string())
    }
}
