//! Cache data structures with TTL support

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::data_fetcher::models::Team;

/// The single roster snapshot held by the data client.
/// Replaced wholesale on every successful fetch, never merged.
#[derive(Debug, Clone)]
pub struct CachedTeams {
    pub teams: Vec<Team>,
    pub cached_at: DateTime<Utc>,
}

impl CachedTeams {
    /// Creates a new snapshot stamped with the current time
    pub fn new(teams: Vec<Team>) -> Self {
        Self::with_timestamp(teams, Utc::now())
    }

    pub fn with_timestamp(teams: Vec<Team>, cached_at: DateTime<Utc>) -> Self {
        Self { teams, cached_at }
    }

    /// Age of the snapshot relative to `now`
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.cached_at
    }

    /// A snapshot is fresh while its age is strictly less than `ttl`
    pub fn is_valid_at(&self, ttl: std::time::Duration, now: DateTime<Utc>) -> bool {
        let age = self.age_at(now);
        let is_valid = match Duration::from_std(ttl) {
            Ok(ttl) => age < ttl,
            // A TTL too large for chrono never expires
            Err(_) => true,
        };

        debug!(
            "Cache validity check: age={}s, ttl={:?}, is_valid={}",
            age.num_seconds(),
            ttl,
            is_valid
        );

        is_valid
    }

    pub fn is_valid(&self, ttl: std::time::Duration) -> bool {
        self.is_valid_at(ttl, Utc::now())
    }
}
