//! Runtime settings read from the environment.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Default chat completion API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default git binary.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

const API_KEY_ENV_VAR: &str = "SARATHI_OPENAI_API_KEY";
const FALLBACK_API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
const API_BASE_ENV_VAR: &str = "SARATHI_API_BASE";
const MODEL_ENV_VAR: &str = "SARATHI_MODEL";
const TIMEOUT_ENV_VAR: &str = "SARATHI_TIMEOUT";
const GIT_ENV_VAR: &str = "SARATHI_GIT";

/// Immutable settings for a single invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: Option<String>,
    /// Request timeout. `None` means wait indefinitely.
    pub timeout: Option<Duration>,
    pub git_program: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: None,
            timeout: None,
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from environment variables.
    pub fn from_env() -> Self {
        let api_key = non_empty_var(API_KEY_ENV_VAR).or_else(|| non_empty_var(FALLBACK_API_KEY_ENV_VAR));

        let api_base = non_empty_var(API_BASE_ENV_VAR)
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            api_key,
            api_base,
            model: non_empty_var(MODEL_ENV_VAR),
            timeout: get_timeout(),
            git_program: non_empty_var(GIT_ENV_VAR)
                .unwrap_or_else(|| DEFAULT_GIT_PROGRAM.to_string()),
        }
    }

    /// Full URL of the chat completion endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get the configured request timeout.
///
/// Reads SARATHI_TIMEOUT (seconds). Unset or empty means no timeout; an
/// unparseable value is logged and ignored.
fn get_timeout() -> Option<Duration> {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(_) => {
                warn!("Invalid {} value '{}', requests will not time out", TIMEOUT_ENV_VAR, v);
                None
            }
        },
        _ => None,
    }
}
