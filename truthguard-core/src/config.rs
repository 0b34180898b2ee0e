//! Provider configuration
//!
//! Which backing capabilities are available is decided purely by which
//! credentials are present. Blank values count as unset, so an empty
//! environment variable never selects a capability.

/// Credentials and settings for the external evidence/reasoning capabilities
///
/// A `None` (or blank) entry means the capability is not configured and will
/// not be instantiated; the offline/heuristic fallbacks are always available
/// regardless.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// SerpAPI search key (`SERPAPI_KEY`)
    pub serpapi_key: Option<String>,
    /// Perplexity online-model key (`PERPLEXITY_API_KEY`)
    pub perplexity_api_key: Option<String>,
    /// Google Custom Search key (`GOOGLE_API_KEY`); requires `google_cx` too
    pub google_api_key: Option<String>,
    /// Google Custom Search engine id (`GOOGLE_CX`)
    pub google_cx: Option<String>,
    /// OpenAI key (`OPENAI_API_KEY`)
    pub openai_api_key: Option<String>,
    /// OpenAI model override (`OPENAI_MODEL`), default `gpt-4o-mini`
    pub openai_model: Option<String>,
    /// Anthropic key (`ANTHROPIC_API_KEY`)
    pub anthropic_api_key: Option<String>,
}

impl ProviderConfig {
    /// Read provider settings from the vendor-standard environment variables
    pub fn from_env() -> Self {
        ProviderConfig {
            serpapi_key: env_non_blank("SERPAPI_KEY"),
            perplexity_api_key: env_non_blank("PERPLEXITY_API_KEY"),
            google_api_key: env_non_blank("GOOGLE_API_KEY"),
            google_cx: env_non_blank("GOOGLE_CX"),
            openai_api_key: env_non_blank("OPENAI_API_KEY"),
            openai_model: env_non_blank("OPENAI_MODEL"),
            anthropic_api_key: env_non_blank("ANTHROPIC_API_KEY"),
        }
    }
}

/// Read an environment variable, treating blank values as unset
///
/// The single definition of the non-blank rule; the gateway's configuration
/// layer uses it too.
pub fn env_non_blank(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
