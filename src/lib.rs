/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # DRS Client
//!
//! A client for GA4GH Data Repository Service (DRS) endpoints served on top of
//! an indexd instance. It fetches objects and bundles, lists them with
//! pagination, creates and deletes bundles, and resolves protocol specific
//! access URLs.
//!
//! Every operation is available in two flavours sharing one implementation:
//!
//! * [`client::DrsClient`] returns futures to be awaited on a tokio runtime.
//! * [`blocking::BlockingDrsClient`] blocks the calling thread until the
//!   response is available.
//!
//! Read style calls (GET) are retried when the server does not answer in
//! time. Bundle creation and deletion are sent once with a timeout guard.
//!
//! ```rust,no_run
//! use drs_client::prelude::*;
//!
//! # async fn run() -> Result<(), DrsError> {
//! let client = DrsClient::new("https://example.org").with_token("secret");
//! let response = client.get("dg.1234/abcd").await?;
//! println!("{} {}", response.status(), response.text());
//! # Ok(())
//! # }
//! ```
//!
//! HTTP error statuses are not turned into errors: the caller inspects
//! [`model::responses::DrsResponse::status`]. Only transport failures surface
//! as [`error::DrsError`].

/// Blocking facade driving the async implementation to completion
pub mod blocking;
/// Asynchronous client facade
pub mod client;
/// Configuration loaded from the environment
pub mod config;
/// Default endpoints and limits
pub mod constants;
/// Error type for the library
pub mod error;
/// Dual mode request executor with timeout and retry handling
pub mod executor;
/// Data models for credentials, requests, responses and retry policy
pub mod model;
/// Commonly used types
pub mod prelude;
/// HTTP transport abstraction
pub mod transport;
/// Environment, logging and URL helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
