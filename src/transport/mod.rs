/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::DrsError;
use crate::model::requests::RequestDescriptor;
use crate::model::responses::DrsResponse;
use async_trait::async_trait;

/// reqwest backed transport
pub mod http;

pub use http::ReqwestTransport;

/// Issues one HTTP request
///
/// Implementations must return HTTP error statuses as responses and report
/// timeouts as [`DrsError::Timeout`] so the retry policy can see them.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and reads the full response
    async fn execute(&self, request: RequestDescriptor) -> Result<DrsResponse, DrsError>;
}
