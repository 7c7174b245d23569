/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::USER_AGENT;
use crate::error::DrsError;
use crate::model::auth::AuthMechanism;
use crate::model::requests::RequestDescriptor;
use crate::model::responses::DrsResponse;
use crate::transport::Transport;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Transport that opens a fresh reqwest session for every request
///
/// The session lives for the duration of [`Transport::execute`] only and is
/// dropped on every exit path, errors included. Nothing is pooled between
/// calls.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    user_agent: String,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(USER_AGENT)
    }
}

impl ReqwestTransport {
    /// Creates a transport sending the given user agent
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    fn open_session(&self) -> Result<Client, DrsError> {
        Ok(Client::builder().user_agent(&self.user_agent).build()?)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: RequestDescriptor) -> Result<DrsResponse, DrsError> {
        let session = self.open_session()?;

        let mut builder = session.request(request.method.clone(), &request.url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match &request.auth {
            AuthMechanism::Basic(auth) => {
                builder.basic_auth(&auth.username, auth.password.as_ref())
            }
            AuthMechanism::Bearer(token) => builder.bearer_auth(token),
            AuthMechanism::None => builder,
        };

        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        debug!("{} {} -> {} ({} bytes)", request.method, request.url, status, body.len());

        Ok(DrsResponse::new(status, headers, body.to_vec()))
    }
}
