//! Configuration loading: optional `pitchkit.toml` plus the API credential
//! from the environment.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, DEFAULT_DISCOVERY_QUESTIONS};

/// Optional config file searched for in the working directory.
pub const CONFIG_FILE: &str = "pitchkit.toml";

/// Environment variable carrying the completion-backend credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Completion backend settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub api_url: Url,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Toolkit content settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Override for the fixed discovery-question list.
    pub discovery_questions: Option<Vec<String>>,
}

/// Full application configuration; every section is optional and defaulted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: BackendConfig,
    pub toolkit: ToolkitConfig,
}

impl AppConfig {
    /// Load `pitchkit.toml` from the given directory; a missing file yields
    /// defaults.
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|err| AppError::ConfigParse {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
    }

    /// The discovery-question list for assembled toolkits: the configured
    /// override when present, otherwise the built-in default. Overrides must
    /// stay within the 5-7 item contract.
    pub fn discovery_questions(&self) -> Result<Vec<String>, AppError> {
        match &self.toolkit.discovery_questions {
            Some(questions) => {
                if !(5..=7).contains(&questions.len()) {
                    return Err(AppError::config_error(format!(
                        "discovery_questions must contain 5 to 7 items, got {}",
                        questions.len()
                    )));
                }
                Ok(questions.clone())
            }
            None => Ok(DEFAULT_DISCOVERY_QUESTIONS.iter().map(|q| q.to_string()).collect()),
        }
    }
}

/// Resolve the backend credential, failing fast before any generation attempt.
pub fn resolve_api_key() -> Result<String, AppError> {
    env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            AppError::config_error(format!("{} environment variable not set", API_KEY_ENV))
        })
}
