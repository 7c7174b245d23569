/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Request execution shared by the async and blocking clients
//!
//! There is a single async code path per request. [`Executor::execute`]
//! returns it as a future for async callers, and [`Executor::execute_blocking`]
//! drives the very same future to completion on a short lived runtime for
//! blocking callers.
//!
//! Around the transport call the executor layers, from the inside out:
//!
//! 1. the default timeout, applied when the request does not carry one;
//! 2. the retry loop, for requests dispatched with [`Dispatch::RetryOnTimeout`].

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::error::DrsError;
use crate::model::requests::RequestDescriptor;
use crate::model::responses::DrsResponse;
use crate::model::retry::RetryPolicy;
use crate::transport::{ReqwestTransport, Transport};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::{Builder, Handle};
use tracing::debug;

/// How a request is protected against slow servers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// One attempt, bounded by the timeout
    TimeoutOnly,
    /// Timeout on each attempt, retried on timeout up to the policy ceiling
    RetryOnTimeout,
}

/// Sets `default` as the request timeout unless one was given explicitly
pub fn apply_default_timeout(
    mut request: RequestDescriptor,
    default: Duration,
) -> RequestDescriptor {
    request.timeout.get_or_insert(default);
    request
}

/// Runs `future` to completion on the current thread
///
/// A current-thread runtime is built for the call and torn down afterwards.
/// Blocking inside a running tokio runtime would stall or panic, so that case
/// is reported as [`DrsError::Runtime`] and the caller should use the async
/// client instead.
pub fn block_on<F: Future>(future: F) -> Result<F::Output, DrsError> {
    if Handle::try_current().is_ok() {
        return Err(DrsError::Runtime(
            "blocking call made from inside an async runtime; use DrsClient instead".to_string(),
        ));
    }
    let runtime = Builder::new_current_thread().enable_all().build()?;
    Ok(runtime.block_on(future))
}

/// Sends requests through a [`Transport`] with timeout and retry handling
#[derive(Clone)]
pub struct Executor {
    transport: Arc<dyn Transport>,
    default_timeout: Duration,
    retry: RetryPolicy,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestTransport::default()))
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("default_timeout", &self.default_timeout)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl Executor {
    /// Creates an executor with a 60 second default timeout and the default retry policy
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            default_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }

    /// Replaces the default timeout
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Replaces the retry policy
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Replaces the transport
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Timeout applied to requests that do not set one
    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Retry policy in use
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Dispatch mode the retry policy assigns to this request's verb
    pub fn dispatch_for(&self, request: &RequestDescriptor) -> Dispatch {
        if self.retry.applies_to(&request.method) {
            Dispatch::RetryOnTimeout
        } else {
            Dispatch::TimeoutOnly
        }
    }

    /// Sends the request with the dispatch mode its verb calls for
    pub async fn send(&self, request: RequestDescriptor) -> Result<DrsResponse, DrsError> {
        let dispatch = self.dispatch_for(&request);
        self.execute(request, dispatch).await
    }

    /// Blocking counterpart of [`Executor::send`]
    pub fn send_blocking(&self, request: RequestDescriptor) -> Result<DrsResponse, DrsError> {
        block_on(self.send(request))?
    }

    /// Sends the request with an explicit dispatch mode
    pub async fn execute(
        &self,
        request: RequestDescriptor,
        dispatch: Dispatch,
    ) -> Result<DrsResponse, DrsError> {
        match dispatch {
            Dispatch::TimeoutOnly => self.attempt(request).await,
            Dispatch::RetryOnTimeout => self.retry.run(|| self.attempt(request.clone())).await,
        }
    }

    /// Blocking counterpart of [`Executor::execute`]
    pub fn execute_blocking(
        &self,
        request: RequestDescriptor,
        dispatch: Dispatch,
    ) -> Result<DrsResponse, DrsError> {
        block_on(self.execute(request, dispatch))?
    }

    async fn attempt(&self, request: RequestDescriptor) -> Result<DrsResponse, DrsError> {
        let request = apply_default_timeout(request, self.default_timeout);
        debug!(
            "{} {} (timeout {:?})",
            request.method, request.url, request.timeout
        );
        self.transport.execute(request).await
    }
}
