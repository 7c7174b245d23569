/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Path used to check that the index service is online
pub const STATUS_ENDPOINT: &str = "/index";
/// Default path for object and bundle reads
pub const DRS_OBJECTS_ENDPOINT: &str = "/ga4gh/drs/v1/objects";
/// Path for bundle creation and deletion
pub const BUNDLE_ENDPOINT: &str = "bundle";
/// Default timeout in seconds applied to every request that does not set one
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Total number of attempts for requests retried on timeout
pub const MAX_RETRIES: u32 = 10;
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("drs-client/", env!("CARGO_PKG_VERSION"));
