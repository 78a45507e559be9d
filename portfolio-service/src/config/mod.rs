use crate::services::providers::gemini::{GeminiConfig, GEMINI_API_BASE};
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-lite";

/// Provider calls are cut off after this many seconds unless overridden.
const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub environment: RuntimeMode,
    pub gemini: GeminiSettings,
}

/// Where the process runs.
///
/// In `Production` the router is handed to an embedding host and the binary
/// does not bind a socket itself. Any value other than production means
/// `Development`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    /// `None` leaves chat disabled; every chat request then fails with a
    /// configuration error instead of the process refusing to start.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl PortfolioConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common_config = core_config::Config::load()?;

        Ok(PortfolioConfig {
            common: common_config,
            environment: RuntimeMode::detect(
                env::var("ENVIRONMENT").ok().as_deref(),
                env::var("NODE_ENV").ok().as_deref(),
            ),
            gemini: GeminiSettings {
                api_key: env::var("GEMINI_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                base_url: env_or("GEMINI_API_BASE", GEMINI_API_BASE),
                timeout_secs: env_or("GEMINI_TIMEOUT_SECS", &DEFAULT_GEMINI_TIMEOUT_SECS.to_string())
                    .parse()
                    .map_err(|e| {
                        AppError::ConfigError(anyhow::anyhow!(
                            "GEMINI_TIMEOUT_SECS must be a whole number of seconds: {}",
                            e
                        ))
                    })?,
            },
        })
    }

    /// Whether the binary should bind its own listener.
    pub fn self_binds(&self) -> bool {
        self.environment != RuntimeMode::Production
    }

    /// Provider settings, or `None` when no credential is configured.
    pub fn gemini_provider_config(&self) -> Option<GeminiConfig> {
        self.gemini.api_key.as_ref().map(|api_key| GeminiConfig {
            api_key: api_key.clone(),
            model: self.gemini.model.clone(),
            base_url: self.gemini.base_url.clone(),
            timeout: Duration::from_secs(self.gemini.timeout_secs),
        })
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            environment: RuntimeMode::Development,
            gemini: GeminiSettings {
                api_key: None,
                model: DEFAULT_GEMINI_MODEL.to_string(),
                base_url: GEMINI_API_BASE.to_string(),
                timeout_secs: DEFAULT_GEMINI_TIMEOUT_SECS,
            },
        }
    }
}

impl RuntimeMode {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "production" | "prod" => RuntimeMode::Production,
            _ => RuntimeMode::Development,
        }
    }

    /// Hosted when either `ENVIRONMENT` or `NODE_ENV` names production.
    pub fn detect(environment: Option<&str>, node_env: Option<&str>) -> Self {
        let hosted = [environment, node_env]
            .into_iter()
            .flatten()
            .any(|name| Self::from_name(name) == RuntimeMode::Production);

        if hosted {
            RuntimeMode::Production
        } else {
            RuntimeMode::Development
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
