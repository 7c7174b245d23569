/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::DRS_OBJECTS_ENDPOINT;
use crate::model::auth::AuthMechanism;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Everything the transport needs to issue one HTTP request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP verb
    pub method: Method,
    /// Fully resolved URL
    pub url: String,
    /// Query parameters, in insertion order
    pub query: Vec<(String, String)>,
    /// Extra headers
    pub headers: Vec<(String, String)>,
    /// JSON body, if any
    pub body: Option<Value>,
    /// Per attempt timeout; `None` until the executor applies its default
    pub timeout: Option<Duration>,
    /// Credential to attach
    pub auth: AuthMechanism,
}

impl RequestDescriptor {
    /// Creates a bare request with no query, headers, body or credential
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            timeout: None,
            auth: AuthMechanism::None,
        }
    }

    /// Adds a query parameter
    pub fn with_query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Appends all pairs to the query
    pub fn with_query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Adds a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets a JSON body
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets an explicit timeout, which the executor will not override
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the credential
    pub fn with_auth(mut self, auth: AuthMechanism) -> Self {
        self.auth = auth;
        self
    }

    /// Looks up a header by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Looks up a query parameter by name
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Parameters for listing objects and bundles
///
/// Unset, empty and zero values are left out of the query string entirely.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListParams {
    /// Listing path, e.g. `/ga4gh/drs/v1/objects`, `bundle` or `index`
    pub endpoint: String,
    /// Identifier to start listing after
    pub start: Option<String>,
    /// Maximum number of records
    pub limit: Option<u32>,
    /// Page number
    pub page: Option<u32>,
    /// Record kind: `bundle`, `object` or `all`; passed through unchecked
    pub form: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            endpoint: DRS_OBJECTS_ENDPOINT.to_string(),
            start: None,
            limit: None,
            page: None,
            form: None,
        }
    }
}

impl ListParams {
    /// Lists the default DRS objects endpoint
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the start marker
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Set the limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the form
    pub fn with_form(mut self, form: impl Into<String>) -> Self {
        self.form = Some(form.into());
        self
    }

    /// Query pairs for the values that are set and non-empty
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(start) = self.start.as_deref().filter(|s| !s.is_empty()) {
            query.push(("start".to_string(), start.to_string()));
        }
        if let Some(limit) = self.limit.filter(|&l| l != 0) {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(page) = self.page.filter(|&p| p != 0) {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(form) = self.form.as_deref().filter(|f| !f.is_empty()) {
            query.push(("form".to_string(), form.to_string()));
        }
        query
    }
}

/// A checksum entry of a bundle
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Checksum {
    /// Hex digest
    pub checksum: String,
    /// Algorithm name, e.g. `md5` or `sha256`
    #[serde(rename = "type")]
    pub checksum_type: String,
}

impl Checksum {
    /// Creates a checksum entry
    pub fn new(checksum: impl Into<String>, checksum_type: impl Into<String>) -> Self {
        Self {
            checksum: checksum.into(),
            checksum_type: checksum_type.into(),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn is_zero_or_none(value: &Option<u64>) -> bool {
    value.is_none_or(|v| v == 0)
}

fn is_empty_list<T>(value: &Option<Vec<T>>) -> bool {
    value.as_ref().is_none_or(Vec::is_empty)
}

/// Payload of a bundle creation request
///
/// `bundles` is always sent, as an empty list when nothing was given. Every
/// other field is sent only when it carries a value: empty strings, empty
/// lists and a zero size are dropped. The server fills in what is missing
/// (a generated guid, a computed size and md5 checksum, the guid as name).
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreateBundle {
    /// Object guids and bundle ids grouped by the bundle
    #[serde(default)]
    pub bundles: Vec<String>,
    /// Bundle id to use instead of a server generated one
    #[serde(rename = "bundle_id", default, skip_serializing_if = "is_blank")]
    pub guid: Option<String>,
    /// Total size in bytes
    #[serde(default, skip_serializing_if = "is_zero_or_none")]
    pub size: Option<u64>,
    /// Display name
    #[serde(default, skip_serializing_if = "is_blank")]
    pub name: Option<String>,
    /// Checksums of the bundle
    #[serde(default, skip_serializing_if = "is_empty_list")]
    pub checksums: Option<Vec<Checksum>>,
    /// Free text description
    #[serde(default, skip_serializing_if = "is_blank")]
    pub description: Option<String>,
    /// Version label
    #[serde(default, skip_serializing_if = "is_blank")]
    pub version: Option<String>,
    /// Alternative names
    #[serde(default, skip_serializing_if = "is_empty_list")]
    pub aliases: Option<Vec<String>>,
}

impl CreateBundle {
    /// Creates a payload for the given members; `None` means an empty bundle
    pub fn new(bundles: Option<Vec<String>>) -> Self {
        Self {
            bundles: bundles.unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Creates a payload from any list of member ids
    pub fn with_members<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Some(members.into_iter().map(Into::into).collect()))
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the bundle id
    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(guid.into());
        self
    }

    /// Set the size
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the checksums
    pub fn with_checksums(mut self, checksums: Vec<Checksum>) -> Self {
        self.checksums = Some(checksums);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the aliases
    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// JSON body sent to the server
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
