/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing URL joining helpers
pub mod url;

pub use config::*;
pub use logger::*;
pub use url::*;
