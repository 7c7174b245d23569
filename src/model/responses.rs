/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::DrsError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Raw HTTP response handed back to the caller
///
/// The body is fully read before the transport session is released, so the
/// value can be inspected from blocking and async code alike. Status codes
/// are not interpreted: 404 or 400 come back as regular responses.
#[derive(Debug, Clone, PartialEq)]
pub struct DrsResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl DrsResponse {
    /// Creates a response from its parts
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Shortcut for `status().as_u16()`
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, with invalid UTF-8 replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Body parsed as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DrsError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Consumes the response and returns the body
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

/// Access descriptor returned by `GET {objects}/{id}/access/{protocol}`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccessUrl {
    /// URL the bytes can be fetched from, typically presigned
    pub url: String,
    /// Headers to send along, formatted as `Name: value`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<String>,
}
