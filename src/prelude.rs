/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # DRS Client Prelude
//!
//! Brings the commonly used types into scope:
//!
//! ```rust
//! use drs_client::prelude::*;
//!
//! let client = BlockingDrsClient::new("http://localhost:8080")
//!     .with_auth(BasicAuth::new("user", "user"));
//! let bundle = CreateBundle::with_members(["dg.1234/abcd"]).with_name("example");
//! # let _ = (client, bundle);
//! ```

// ============================================================================
// CLIENTS
// ============================================================================

/// Async client
pub use crate::client::DrsClient;

/// Blocking client
pub use crate::blocking::BlockingDrsClient;

// ============================================================================
// CONFIGURATION AND ERRORS
// ============================================================================

/// Configuration loaded from the environment
pub use crate::config::Config;

/// Error type
pub use crate::error::DrsError;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// MODELS
// ============================================================================

/// Credentials
pub use crate::model::auth::{AuthMechanism, BasicAuth};

/// Request payloads and parameters
pub use crate::model::requests::{Checksum, CreateBundle, ListParams, RequestDescriptor};

/// Responses
pub use crate::model::responses::{AccessUrl, DrsResponse};

/// Retry configuration
pub use crate::model::retry::{RetryPolicy, RetryScope};

// ============================================================================
// EXECUTION AND TRANSPORT
// ============================================================================

/// Executor and dispatch modes
pub use crate::executor::{Dispatch, Executor};

/// Transport abstraction and default implementation
pub use crate::transport::{ReqwestTransport, Transport};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup
pub use crate::utils::logger::setup_logger;

/// URL joining
pub use crate::utils::url::url_for;
