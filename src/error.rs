use std::fmt;
use thiserror::Error;

/// Which stage of a provider request failed for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceFailure {
    /// The request never produced a usable response (network, timeout, HTTP status)
    Request,
    /// A response arrived but its body could not be decoded
    MalformedResponse,
}

impl fmt::Display for DataSourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceFailure::Request => write!(f, "Failed to fetch data"),
            DataSourceFailure::MalformedResponse => write!(f, "Invalid JSON response"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    /// The only error the data client lets escape: every attempt failed and
    /// there was no snapshot to fall back on.
    #[error("{kind} from {url}: {cause}")]
    DataSource {
        kind: DataSourceFailure,
        url: String,
        cause: String,
    },

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a data source error
    pub fn data_source(
        kind: DataSourceFailure,
        url: impl Into<String>,
        cause: impl Into<String>,
    ) -> Self {
        Self::DataSource {
            kind,
            url: url.into(),
            cause: cause.into(),
        }
    }

    /// Check if error is retryable (network issues, server errors, undecodable bodies).
    /// Client errors (4xx) fail immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiMalformedJson { .. }
        )
    }

    /// Wraps the last failed attempt into the data source error surfaced to callers.
    pub fn into_data_source(self, url: &str) -> Self {
        match self {
            AppError::DataSource { .. } => self,
            AppError::ApiMalformedJson { message, .. } => {
                Self::data_source(DataSourceFailure::MalformedResponse, url, message)
            }
            other => Self::data_source(DataSourceFailure::Request, url, other.to_string()),
        }
    }

    pub fn is_data_source(&self) -> bool {
        matches!(self, AppError::DataSource { .. })
    }
}
