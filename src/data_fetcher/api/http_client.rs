//! HTTP client creation and configuration utilities

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

use crate::constants::provider::AUTH_HEADER;
use crate::error::AppError;

/// Creates a blocking HTTP client with a per-request timeout and the provider
/// auth header attached to every request.
///
/// The whole data client runs on the caller's thread; there is no async runtime
/// behind it, so callers inside one must hop onto a blocking thread first.
pub fn create_http_client(api_key: &str, timeout_seconds: u64) -> Result<Client, AppError> {
    let name = HeaderName::from_bytes(AUTH_HEADER.as_bytes())
        .map_err(|e| AppError::config_error(format!("Invalid auth header name: {e}")))?;
    let mut token = HeaderValue::from_str(api_key)
        .map_err(|e| AppError::config_error(format!("API key is not a valid header value: {e}")))?;
    token.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(name, token);

    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(headers)
        .build()?;

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_http_client() {
        assert!(create_http_client("test_api_key", 10).is_ok());
    }

    #[test]
    fn test_create_http_client_rejects_invalid_header() {
        let result = create_http_client("bad\nkey", 10);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
