/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::blocking::BlockingDrsClient;
use crate::config::Config;
use crate::constants::{BUNDLE_ENDPOINT, DRS_OBJECTS_ENDPOINT, STATUS_ENDPOINT};
use crate::error::DrsError;
use crate::executor::{Dispatch, Executor};
use crate::model::auth::{AuthMechanism, BasicAuth};
use crate::model::requests::{CreateBundle, ListParams, RequestDescriptor};
use crate::model::responses::DrsResponse;
use crate::model::retry::RetryPolicy;
use crate::transport::Transport;
use crate::utils::url::url_for;
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Async client for DRS objects and indexd bundles
///
/// Credentials and base URL are fixed once the client is built. Each call
/// opens its own transport session, so a client can be cloned and shared
/// freely across tasks.
///
/// Every method returns the raw [`DrsResponse`]; a 404 or 400 from the server
/// is a successful call from the client's point of view.
#[derive(Clone, Debug)]
pub struct DrsClient {
    base_url: String,
    auth: Option<BasicAuth>,
    token: Option<String>,
    executor: Executor,
}

impl DrsClient {
    /// Creates a client for `base_url` without credentials
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth: None,
            token: None,
            executor: Executor::default(),
        }
    }

    /// Creates a client from a [`Config`]
    pub fn from_config(config: &Config) -> Self {
        let executor = Executor::default()
            .with_default_timeout(config.timeout())
            .with_retry_policy(config.retry_policy());
        Self {
            base_url: config.base_url.clone(),
            auth: config.basic_auth(),
            token: config.token.clone().filter(|t| !t.is_empty()),
            executor,
        }
    }

    /// Sets basic auth credentials; they take precedence over a token
    pub fn with_auth(mut self, auth: BasicAuth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Sets a bearer token, used when no basic auth is configured
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the timeout applied to requests that do not carry one
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.executor = self.executor.with_default_timeout(timeout);
        self
    }

    /// Sets the retry policy
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.executor = self.executor.with_retry_policy(policy);
        self
    }

    /// Sets the transport
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.executor = self.executor.with_transport(transport);
        self
    }

    /// Base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Basic auth credentials, if any
    pub fn auth(&self) -> Option<&BasicAuth> {
        self.auth.as_ref()
    }

    /// Bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Executor used for every call
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Blocking client sharing this client's configuration
    pub fn blocking(&self) -> BlockingDrsClient {
        BlockingDrsClient::from(self.clone())
    }

    /// Joins path segments onto the base URL
    pub fn url_for<S: AsRef<str>>(&self, segments: &[S]) -> String {
        url_for(&self.base_url, segments)
    }

    /// Credential attached to authenticated calls
    pub fn auth_mechanism(&self) -> AuthMechanism {
        AuthMechanism::resolve(self.auth.as_ref(), self.token.as_deref())
    }

    fn authed(&self, method: Method, segments: &[&str]) -> RequestDescriptor {
        RequestDescriptor::new(method, self.url_for(segments)).with_auth(self.auth_mechanism())
    }

    pub(crate) fn status_request(&self, endpoint: &str) -> RequestDescriptor {
        RequestDescriptor::new(Method::GET, self.url_for(&[endpoint]))
    }

    pub(crate) fn get_request(&self, id: &str, endpoint: &str, expand: bool) -> RequestDescriptor {
        self.authed(Method::GET, &[endpoint, id])
            .with_query("expand", expand)
    }

    pub(crate) fn get_all_request(&self, params: &ListParams) -> RequestDescriptor {
        self.authed(Method::GET, &[params.endpoint.as_str()])
            .with_query_pairs(params.to_query())
    }

    pub(crate) fn download_request(
        &self,
        id: &str,
        protocol: &str,
        endpoint: &str,
    ) -> RequestDescriptor {
        self.authed(Method::GET, &[endpoint, id, "access", protocol])
    }

    pub(crate) fn create_request(
        &self,
        bundle: &CreateBundle,
    ) -> Result<RequestDescriptor, DrsError> {
        let body = bundle.to_json()?;
        Ok(self
            .authed(Method::POST, &[BUNDLE_ENDPOINT])
            .with_header("content-type", "application/json")
            .with_json(body))
    }

    pub(crate) fn delete_request(&self, guid: &str) -> RequestDescriptor {
        self.authed(Method::DELETE, &[BUNDLE_ENDPOINT, guid])
    }

    /// Checks that the index service answers on `/index`
    ///
    /// Sent without credentials and without retry.
    pub async fn check_status(&self) -> Result<DrsResponse, DrsError> {
        self.check_status_at(STATUS_ENDPOINT).await
    }

    /// Checks liveness on a custom path
    pub async fn check_status_at(&self, endpoint: &str) -> Result<DrsResponse, DrsError> {
        let request = self.status_request(endpoint);
        self.executor.execute(request, Dispatch::TimeoutOnly).await
    }

    /// Fetches an object or bundle from the DRS objects endpoint
    pub async fn get(&self, id: &str) -> Result<DrsResponse, DrsError> {
        self.get_with(id, DRS_OBJECTS_ENDPOINT, false).await
    }

    /// Fetches `{endpoint}/{id}`; `expand` asks for nested bundle contents
    pub async fn get_with(
        &self,
        id: &str,
        endpoint: &str,
        expand: bool,
    ) -> Result<DrsResponse, DrsError> {
        debug!("Getting {} from {} (expand={})", id, endpoint, expand);
        self.executor.send(self.get_request(id, endpoint, expand)).await
    }

    /// Lists objects, bundles or both
    pub async fn get_all(&self, params: &ListParams) -> Result<DrsResponse, DrsError> {
        debug!("Listing {}", params);
        self.executor.send(self.get_all_request(params)).await
    }

    /// Gets the access descriptor of `id` for `protocol` (e.g. `s3`, `gs`)
    pub async fn download(&self, id: &str, protocol: &str) -> Result<DrsResponse, DrsError> {
        self.download_from(id, protocol, DRS_OBJECTS_ENDPOINT).await
    }

    /// Gets `{endpoint}/{id}/access/{protocol}`
    pub async fn download_from(
        &self,
        id: &str,
        protocol: &str,
        endpoint: &str,
    ) -> Result<DrsResponse, DrsError> {
        self.executor
            .send(self.download_request(id, protocol, endpoint))
            .await
    }

    /// Creates a bundle
    pub async fn create(&self, bundle: &CreateBundle) -> Result<DrsResponse, DrsError> {
        info!("Creating bundle with {} members", bundle.bundles.len());
        self.executor.send(self.create_request(bundle)?).await
    }

    /// Deletes the bundle `guid`
    pub async fn delete(&self, guid: &str) -> Result<DrsResponse, DrsError> {
        info!("Deleting bundle {}", guid);
        self.executor.send(self.delete_request(guid)).await
    }
}
