pub mod fetch_utils;
pub mod http_client;
pub mod urls;
mod client;

// Re-export the data client
pub use client::*;
// Re-export retry and fetch utilities
pub use fetch_utils::{RetryPolicy, fetch_once, fetch_with_retry, retry_with_backoff};
// Re-export HTTP client utilities
pub use http_client::*;
// Re-export URL utilities
pub use urls::*;
