//! Application-wide constants and configuration defaults
//!
//! This module centralizes the provider defaults, retry parameters and search
//! thresholds so the config layer and the tests agree on the same values.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Data provider defaults
pub mod provider {
    /// Base URL of the football-data.org v4 API
    pub const DEFAULT_API_BASE_URL: &str = "http://api.football-data.org/v4/";

    /// Competition whose teams are fetched (Premier League)
    pub const DEFAULT_COMPETITION_CODE: &str = "PL";

    /// Header carrying the API key
    pub const AUTH_HEADER: &str = "X-Auth-Token";
}

/// Cache TTL values
pub mod cache_ttl {
    /// How long a fetched roster snapshot is preferred over a refetch (24 hours)
    pub const DEFAULT_TEAMS_HOURS: u64 = 24;
}

/// Retry and backoff parameters for provider requests
pub mod retry {
    /// Additional attempts after the first failed request
    pub const DEFAULT_MAX_RETRIES: u32 = 3;

    /// Delay before the second attempt; doubled for every further attempt
    pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;
}

/// Fuzzy search thresholds
pub mod search {
    /// Minimum similarity for a team name, short name or TLA to match
    pub const DEFAULT_TEAM_THRESHOLD: f64 = 0.6;

    /// Minimum similarity for a player name to match
    pub const DEFAULT_PLAYER_THRESHOLD: f64 = 0.7;
}

/// Environment variable names that override config file values
pub mod env_vars {
    pub const API_BASE_URL: &str = "FOOTBALL_API_BASE";
    pub const API_KEY: &str = "FOOTBALL_API_KEY";
    pub const COMPETITION_CODE: &str = "FOOTBALL_COMPETITION";
    pub const CACHE_TTL_HOURS: &str = "CACHE_TTL_HOURS";
    pub const MAX_RETRIES: &str = "FOOTBALL_MAX_RETRIES";
    pub const RETRY_BASE_DELAY_MS: &str = "FOOTBALL_RETRY_BASE_DELAY_MS";
    pub const HTTP_TIMEOUT: &str = "FOOTBALL_HTTP_TIMEOUT";
    pub const LOG_FILE: &str = "SQUAD_LOOKUP_LOG_FILE";
}
