/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use std::fmt;

/// Username/password pair handed to the HTTP stack's basic auth support
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    /// Account name
    pub username: String,
    /// Optional password
    pub password: Option<String>,
}

impl BasicAuth {
    /// Creates credentials with a password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
        }
    }

    /// Creates credentials made of a username only
    pub fn username_only(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: None,
        }
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Credential attached to one outgoing request
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthMechanism {
    /// No credential
    #[default]
    None,
    /// Basic auth through the transport
    Basic(BasicAuth),
    /// `Authorization: Bearer <token>` header
    Bearer(String),
}

impl AuthMechanism {
    /// Picks the credential for a call
    ///
    /// A configured [`BasicAuth`] always wins. The token is only used when no
    /// auth object is present, and an empty token counts as absent.
    pub fn resolve(auth: Option<&BasicAuth>, token: Option<&str>) -> Self {
        if let Some(auth) = auth {
            return AuthMechanism::Basic(auth.clone());
        }
        match token {
            Some(token) if !token.is_empty() => AuthMechanism::Bearer(token.to_string()),
            _ => AuthMechanism::None,
        }
    }

    /// Value of the `Authorization` header for bearer credentials
    pub fn bearer_header(&self) -> Option<String> {
        match self {
            AuthMechanism::Bearer(token) => Some(format!("Bearer {token}")),
            _ => None,
        }
    }
}

impl fmt::Debug for AuthMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMechanism::None => write!(f, "None"),
            AuthMechanism::Basic(auth) => f.debug_tuple("Basic").field(auth).finish(),
            AuthMechanism::Bearer(_) => write!(f, "Bearer(***)"),
        }
    }
}
