//! Gateway configuration resolution
//!
//! Two-tier resolution with environment → TOML priority, per key. The TOML
//! file lives at `~/.config/truthguard/truthguard-gw.toml` unless
//! `TRUTHGUARD_CONFIG` points elsewhere; a missing file resolves to
//! defaults. A key present in both tiers logs a warning and uses the
//! environment value.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;
use truthguard_core::config::env_non_blank;
use truthguard_core::ProviderConfig;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Resolved gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub port: u16,
    pub providers: ProviderConfig,
}

/// On-disk TOML shape; every key optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub serpapi_key: Option<String>,
    pub perplexity_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub google_cx: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
    pub anthropic_api_key: Option<String>,
}

impl GatewayConfig {
    /// Resolve from the default config file location and the environment
    pub fn resolve() -> Self {
        Self::resolve_from(&config_file_path())
    }

    /// Resolve from an explicit config file path and the environment
    pub fn resolve_from(path: &Path) -> Self {
        let toml_config = load_toml(path);

        let port = match env_non_blank("TRUTHGUARD_PORT") {
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(value = %raw, "TRUTHGUARD_PORT is not a valid port, ignoring");
                    toml_config.port.unwrap_or(DEFAULT_PORT)
                }
            },
            None => toml_config.port.unwrap_or(DEFAULT_PORT),
        };

        let providers = ProviderConfig {
            serpapi_key: resolve_key("SERPAPI_KEY", toml_config.serpapi_key),
            perplexity_api_key: resolve_key("PERPLEXITY_API_KEY", toml_config.perplexity_api_key),
            google_api_key: resolve_key("GOOGLE_API_KEY", toml_config.google_api_key),
            google_cx: resolve_key("GOOGLE_CX", toml_config.google_cx),
            openai_api_key: resolve_key("OPENAI_API_KEY", toml_config.openai_api_key),
            openai_model: resolve_key("OPENAI_MODEL", toml_config.openai_model),
            anthropic_api_key: resolve_key("ANTHROPIC_API_KEY", toml_config.anthropic_api_key),
        };

        GatewayConfig { port, providers }
    }
}

/// Config file location: `TRUTHGUARD_CONFIG` override, else the platform
/// config directory
pub fn config_file_path() -> PathBuf {
    if let Some(path) = env_non_blank("TRUTHGUARD_CONFIG") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .map(|d| d.join("truthguard").join("truthguard-gw.toml"))
        .unwrap_or_else(|| PathBuf::from("truthguard-gw.toml"))
}

fn load_toml(path: &Path) -> TomlConfig {
    if !path.exists() {
        return TomlConfig::default();
    }
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Config file is not valid TOML, using defaults");
                TomlConfig::default()
            }
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Config file could not be read, using defaults");
            TomlConfig::default()
        }
    }
}

/// Per-key resolution: environment wins over TOML
fn resolve_key(env_name: &str, toml_value: Option<String>) -> Option<String> {
    let env_value = env_non_blank(env_name);
    let toml_value = toml_value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if env_value.is_some() && toml_value.is_some() {
        warn!(
            key = env_name,
            "Configured in both environment and TOML; using environment"
        );
    }

    env_value.or(toml_value)
}
