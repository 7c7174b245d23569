/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::MAX_RETRIES;
use crate::error::DrsError;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::{error, warn};

/// Which HTTP verbs are retried on timeout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetryScope {
    /// Only GET and HEAD are retried; POST and DELETE are sent once
    #[default]
    IdempotentOnly,
    /// Every verb is retried, at the risk of duplicating side effects
    AllMethods,
}

/// Count bounded retry on timeout
///
/// Attempts follow each other immediately: there is no delay and no jitter.
/// Only [`DrsError::Timeout`] triggers another attempt; any other error, and
/// any response whatever its status, ends the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, first one included
    pub max_attempts: u32,
    /// Verbs eligible for retry
    pub scope: RetryScope,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_RETRIES,
            scope: RetryScope::IdempotentOnly,
        }
    }
}

impl RetryPolicy {
    /// Creates the default policy: 10 attempts, idempotent verbs only
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A policy that never retries
    #[must_use]
    pub fn single_attempt() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Sets the total number of attempts; values below 1 are raised to 1
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Sets the verbs eligible for retry
    #[must_use]
    pub fn with_scope(mut self, scope: RetryScope) -> Self {
        self.scope = scope;
        self
    }

    /// Effective number of attempts (at least 1)
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Whether requests with this verb go through the retry loop
    #[must_use]
    pub fn applies_to(&self, method: &Method) -> bool {
        match self.scope {
            RetryScope::AllMethods => true,
            RetryScope::IdempotentOnly => *method == Method::GET || *method == Method::HEAD,
        }
    }

    /// Runs `operation` until it returns something other than a timeout or
    /// the attempt budget is spent, in which case the last timeout is returned
    pub async fn run<F, Fut, T>(&self, mut operation: F) -> Result<T, DrsError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, DrsError>>,
    {
        let max_attempts = self.max_attempts();
        let mut attempt = 1;
        loop {
            match operation().await {
                Err(e) if e.is_timeout() => {
                    if attempt >= max_attempts {
                        error!("Request timed out after {} attempts: {}", attempt, e);
                        return Err(e);
                    }
                    warn!(
                        "Request timed out (attempt {}/{}): {}. Retrying...",
                        attempt, max_attempts, e
                    );
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}
