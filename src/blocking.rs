/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::client::DrsClient;
use crate::config::Config;
use crate::constants::{DRS_OBJECTS_ENDPOINT, STATUS_ENDPOINT};
use crate::error::DrsError;
use crate::executor::Dispatch;
use crate::model::auth::BasicAuth;
use crate::model::requests::{CreateBundle, ListParams};
use crate::model::responses::DrsResponse;
use crate::model::retry::RetryPolicy;
use crate::transport::Transport;
use std::sync::Arc;
use std::time::Duration;

/// Blocking client with the same operations as [`DrsClient`]
///
/// Requests are built by the wrapped [`DrsClient`] and run by the same
/// executor; each call blocks the current thread on a runtime of its own.
/// Calling these methods from inside a tokio runtime returns
/// [`DrsError::Runtime`]: use the async client there.
#[derive(Clone, Debug)]
pub struct BlockingDrsClient {
    inner: DrsClient,
}

impl From<DrsClient> for BlockingDrsClient {
    fn from(inner: DrsClient) -> Self {
        Self { inner }
    }
}

impl BlockingDrsClient {
    /// Creates a client for `base_url` without credentials
    pub fn new(base_url: impl Into<String>) -> Self {
        DrsClient::new(base_url).into()
    }

    /// Creates a client from a [`Config`]
    pub fn from_config(config: &Config) -> Self {
        DrsClient::from_config(config).into()
    }

    /// Sets basic auth credentials; they take precedence over a token
    pub fn with_auth(self, auth: BasicAuth) -> Self {
        self.inner.with_auth(auth).into()
    }

    /// Sets a bearer token
    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.inner.with_token(token).into()
    }

    /// Sets the default timeout
    pub fn with_default_timeout(self, timeout: Duration) -> Self {
        self.inner.with_default_timeout(timeout).into()
    }

    /// Sets the retry policy
    pub fn with_retry_policy(self, policy: RetryPolicy) -> Self {
        self.inner.with_retry_policy(policy).into()
    }

    /// Sets the transport
    pub fn with_transport(self, transport: Arc<dyn Transport>) -> Self {
        self.inner.with_transport(transport).into()
    }

    /// The async client backing this one
    pub fn as_async(&self) -> &DrsClient {
        &self.inner
    }

    /// Joins path segments onto the base URL
    pub fn url_for<S: AsRef<str>>(&self, segments: &[S]) -> String {
        self.inner.url_for(segments)
    }

    /// See [`DrsClient::check_status`]
    pub fn check_status(&self) -> Result<DrsResponse, DrsError> {
        self.check_status_at(STATUS_ENDPOINT)
    }

    /// See [`DrsClient::check_status_at`]
    pub fn check_status_at(&self, endpoint: &str) -> Result<DrsResponse, DrsError> {
        let request = self.inner.status_request(endpoint);
        self.inner
            .executor()
            .execute_blocking(request, Dispatch::TimeoutOnly)
    }

    /// See [`DrsClient::get`]
    pub fn get(&self, id: &str) -> Result<DrsResponse, DrsError> {
        self.get_with(id, DRS_OBJECTS_ENDPOINT, false)
    }

    /// See [`DrsClient::get_with`]
    pub fn get_with(
        &self,
        id: &str,
        endpoint: &str,
        expand: bool,
    ) -> Result<DrsResponse, DrsError> {
        let request = self.inner.get_request(id, endpoint, expand);
        self.inner.executor().send_blocking(request)
    }

    /// See [`DrsClient::get_all`]
    pub fn get_all(&self, params: &ListParams) -> Result<DrsResponse, DrsError> {
        let request = self.inner.get_all_request(params);
        self.inner.executor().send_blocking(request)
    }

    /// See [`DrsClient::download`]
    pub fn download(&self, id: &str, protocol: &str) -> Result<DrsResponse, DrsError> {
        self.download_from(id, protocol, DRS_OBJECTS_ENDPOINT)
    }

    /// See [`DrsClient::download_from`]
    pub fn download_from(
        &self,
        id: &str,
        protocol: &str,
        endpoint: &str,
    ) -> Result<DrsResponse, DrsError> {
        let request = self.inner.download_request(id, protocol, endpoint);
        self.inner.executor().send_blocking(request)
    }

    /// See [`DrsClient::create`]
    pub fn create(&self, bundle: &CreateBundle) -> Result<DrsResponse, DrsError> {
        let request = self.inner.create_request(bundle)?;
        self.inner.executor().send_blocking(request)
    }

    /// See [`DrsClient::delete`]
    pub fn delete(&self, guid: &str) -> Result<DrsResponse, DrsError> {
        let request = self.inner.delete_request(guid);
        self.inner.executor().send_blocking(request)
    }
}
