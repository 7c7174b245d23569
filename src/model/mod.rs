/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Credentials and how they are attached to requests
pub mod auth;
/// Request descriptors and request payloads
pub mod requests;
/// Responses returned to callers
pub mod responses;
/// Retry policy for timed out requests
pub mod retry;
