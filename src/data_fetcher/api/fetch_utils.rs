//! Generic HTTP fetching utilities with retry logic and error handling

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::error::AppError;

/// How many times a failed request is repeated and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first one
    pub max_retries: u32,
    /// Wait before the second attempt; doubled for each further attempt
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Delay before retry number `retry` (0-based): base, 2*base, 4*base, ...
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2u32.checked_pow(retry).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            crate::constants::retry::DEFAULT_MAX_RETRIES,
            Duration::from_millis(crate::constants::retry::DEFAULT_BASE_DELAY_MS),
        )
    }
}

/// Runs `operation` until it succeeds, fails with a non-retryable error, or
/// the policy's attempts are used up. `sleep` is called with the backoff delay
/// between attempts. The last error is returned unchanged.
pub fn retry_with_backoff<T, F, S>(
    policy: &RetryPolicy,
    url: &str,
    mut operation: F,
    mut sleep: S,
) -> Result<T, AppError>
where
    F: FnMut(u32) -> Result<T, AppError>,
    S: FnMut(Duration),
{
    let mut attempt = 0u32;
    loop {
        match operation(attempt) {
            Ok(value) => return Ok(value),
            Err(e) if !e.is_retryable() => {
                error!("Non-retryable failure for {}: {}", url, e);
                return Err(e);
            }
            Err(e) if attempt >= policy.max_retries => {
                error!(
                    "Giving up on {} after {} attempts: {}",
                    url,
                    attempt + 1,
                    e
                );
                return Err(e);
            }
            Err(e) => {
                let wait = policy.delay_for(attempt);
                warn!(
                    "Request error {} for {}. Retrying in {:?} (attempt {}/{})",
                    e,
                    url,
                    wait,
                    attempt + 1,
                    policy.max_retries
                );
                sleep(wait);
                attempt += 1;
            }
        }
    }
}

/// Performs one GET against `url` and decodes the JSON body.
///
/// Transport failures, 5xx statuses and undecodable bodies come back as
/// retryable errors; 4xx statuses as [`AppError::ApiClientError`].
#[instrument(skip(client))]
pub fn fetch_once<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client.get(url).send().map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            400..=499 => AppError::api_client_error(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = response.text().map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", response_text.len());

    serde_json::from_str::<T>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            &response_text.chars().take(200).collect::<String>()
        );
        AppError::api_malformed_json(e.to_string(), url)
    })
}

/// [`fetch_once`] wrapped in [`retry_with_backoff`], sleeping the calling thread
/// between attempts.
pub fn fetch_with_retry<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    policy: &RetryPolicy,
) -> Result<T, AppError> {
    retry_with_backoff(policy, url, |_| fetch_once(client, url), std::thread::sleep)
}
