/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_TIMEOUT_SECS, MAX_RETRIES};
use crate::model::auth::BasicAuth;
use crate::model::retry::{RetryPolicy, RetryScope};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Settings used to build a client
pub struct Config {
    /// Base URL of the DRS / indexd service
    pub base_url: String,
    /// Default timeout in seconds for requests that do not set one
    pub timeout_secs: u64,
    /// Total attempts for requests retried on timeout
    pub max_attempts: u32,
    /// Verbs eligible for retry
    pub retry_scope: RetryScope,
    /// Bearer token, used only when no username is configured
    #[serde(skip_serializing, default)]
    pub token: Option<String>,
    /// Basic auth username
    pub username: Option<String>,
    /// Basic auth password
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment
    ///
    /// A `.env` file is loaded first when present. Recognised variables:
    /// `DRS_BASE_URL`, `DRS_TIMEOUT_SECS`, `DRS_MAX_ATTEMPTS`,
    /// `DRS_RETRY_ALL_METHODS`, `DRS_TOKEN`, `DRS_USERNAME`, `DRS_PASSWORD`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("DRS_BASE_URL", String::new());
        if base_url.is_empty() {
            error!("DRS_BASE_URL not found in environment variables or .env file");
        }

        let retry_scope = if get_env_or_default("DRS_RETRY_ALL_METHODS", false) {
            RetryScope::AllMethods
        } else {
            RetryScope::IdempotentOnly
        };

        Config {
            base_url,
            timeout_secs: get_env_or_default("DRS_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            max_attempts: get_env_or_default("DRS_MAX_ATTEMPTS", MAX_RETRIES),
            retry_scope,
            token: get_env_or_none("DRS_TOKEN"),
            username: get_env_or_none("DRS_USERNAME"),
            password: get_env_or_none("DRS_PASSWORD"),
        }
    }

    /// Configuration for a base URL with every other value at its default,
    /// without reading the environment
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Config {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_attempts: MAX_RETRIES,
            retry_scope: RetryScope::IdempotentOnly,
            token: None,
            username: None,
            password: None,
        }
    }

    /// Default request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Retry policy described by this configuration
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new()
            .with_max_attempts(self.max_attempts)
            .with_scope(self.retry_scope)
    }

    /// Basic auth credentials, when a non-empty username is configured
    pub fn basic_auth(&self) -> Option<BasicAuth> {
        self.username
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(|username| BasicAuth {
                username: username.to_string(),
                password: self.password.clone(),
            })
    }
}
