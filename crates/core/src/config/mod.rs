//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (CEYLON_*)
//! 2. `GEMINI_API_KEY`, as an alias for the API key
//! 3. TOML config file (if CEYLON_CONFIG_FILE set)
//! 4. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::sanitize::SanitizerMode;

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (CEYLON_*)
/// 2. `GEMINI_API_KEY`
/// 3. TOML config file (if CEYLON_CONFIG_FILE set)
/// 4. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the generative model.
    ///
    /// Set via CEYLON_API_KEY or GEMINI_API_KEY. Not validated here; a missing
    /// key surfaces as an authentication failure from the remote call.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model name passed to the generateContent endpoint.
    ///
    /// Set via CEYLON_MODEL environment variable.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Generative Language API.
    ///
    /// Set via CEYLON_BASE_URL environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Client-side request timeout in milliseconds.
    ///
    /// Unset by default, leaving the remote side's own timeout in charge.
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via CEYLON_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Which HTML sanitizer to use: auto, dom or regex.
    ///
    /// Set via CEYLON_SANITIZER environment variable.
    #[serde(default)]
    pub sanitizer: SanitizerMode,

    /// Seed for theme selection and shuffling.
    ///
    /// Set via CEYLON_SEED. Unset means seeded from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_model() -> String {
    "gemini-2.5-flash".into()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".into()
}

fn default_user_agent() -> String {
    concat!("ceylon/", env!("CARGO_PKG_VERSION")).into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_ms: None,
            user_agent: default_user_agent(),
            sanitizer: SanitizerMode::default(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Timeout as Duration, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment()
            .extract()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// The layered figment used by [`AppConfig::load`].
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("CEYLON_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment
            .merge(Env::raw().only(&["GEMINI_API_KEY"]).map(|_| "api_key".into()))
            .merge(Env::prefixed("CEYLON_").ignore(&["CONFIG_FILE"]).map(|key| key.as_str().to_lowercase().into()))
    }

    /// The API key, or an empty string when none was configured.
    pub fn api_key_or_empty(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }
}
