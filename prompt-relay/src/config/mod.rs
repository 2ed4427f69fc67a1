use crate::services::providers::gemini::GeminiConfig;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_API_VERSION: &str = "v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// Name of the environment variable holding the API key. The key itself
    /// is read per request, not at load time.
    pub api_key_var: String,
    pub model: String,
    pub api_base: String,
    pub api_version: String,
    pub timeout_secs: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key_var: DEFAULT_API_KEY_VAR.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(RelayConfig {
            common: common_config,
            gemini: GeminiSettings::load()?,
        })
    }
}

impl GeminiSettings {
    pub fn load() -> Result<Self, AppError> {
        let timeout_secs = get_env("GEMINI_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("GEMINI_TIMEOUT_SECS is invalid: {}", e))
            })?;

        if timeout_secs == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "GEMINI_TIMEOUT_SECS must be greater than zero"
            )));
        }

        Ok(GeminiSettings {
            api_key_var: get_env("GEMINI_API_KEY_VAR", DEFAULT_API_KEY_VAR),
            model: get_env("GEMINI_MODEL", DEFAULT_MODEL),
            api_base: get_env("GEMINI_API_BASE", DEFAULT_API_BASE),
            api_version: get_env("GEMINI_API_VERSION", DEFAULT_API_VERSION),
            timeout_secs,
        })
    }

    pub fn provider_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_base: self.api_base.clone(),
            api_version: self.api_version.clone(),
            model: self.model.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|val| !val.is_empty())
        .unwrap_or_else(|| default.to_string())
}
