use chrono::{DateTime, Local, Utc};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{info, instrument, warn};

use super::fetch_utils::{RetryPolicy, fetch_with_retry};
use super::http_client::create_http_client;
use super::urls::build_teams_url;
use crate::config::Config;
use crate::data_fetcher::cache::CachedTeams;
use crate::data_fetcher::models::{Team, TeamsResponse, teams_from_response};
use crate::error::AppError;

/// Client for the football-data teams endpoint.
///
/// Owns the one cache slot: empty until the first successful fetch, replaced
/// wholesale afterwards, and kept past its TTL so a failed refresh can fall
/// back to it. Calls block the current thread, backoff sleeps included.
#[derive(Debug)]
pub struct FootballApiClient {
    client: Client,
    teams_url: String,
    retry_policy: RetryPolicy,
    cache: Option<CachedTeams>,
}

impl FootballApiClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client(&config.api_key, config.http_timeout_seconds)?;
        Ok(Self {
            client,
            teams_url: build_teams_url(&config.api_base_url, &config.competition_code),
            retry_policy: config.retry_policy(),
            cache: None,
        })
    }

    pub fn teams_url(&self) -> &str {
        &self.teams_url
    }

    /// Returns the competition's teams.
    ///
    /// A cached snapshot younger than `ttl` is returned without touching the
    /// network when `use_cache` is set. Otherwise the provider is queried with
    /// retries; if every attempt fails, any existing snapshot is returned no
    /// matter how old, and only without one does the call fail with
    /// [`AppError::DataSource`].
    #[instrument(skip(self), fields(url = %self.teams_url))]
    pub fn get_teams(&mut self, use_cache: bool, ttl: Duration) -> Result<Vec<Team>, AppError> {
        if use_cache && let Some(cached) = self.cache.as_ref().filter(|c| c.is_valid(ttl)) {
            info!("Using cached teams data ({} teams)", cached.teams.len());
            return Ok(cached.teams.clone());
        }

        info!("Fetching teams data from API");

        match fetch_with_retry::<TeamsResponse>(&self.client, &self.teams_url, &self.retry_policy) {
            Ok(response) => {
                let teams = teams_from_response(response, Local::now().date_naive());
                info!("Successfully loaded {} teams", teams.len());
                self.cache = Some(CachedTeams::new(teams.clone()));
                Ok(teams)
            }
            Err(e) => match &self.cache {
                Some(stale) => {
                    warn!(
                        "API failed, using stale cached data from {}: {}",
                        stale.cached_at, e
                    );
                    Ok(stale.teams.clone())
                }
                None => Err(e.into_data_source(&self.teams_url)),
            },
        }
    }

    /// Whether a snapshot exists and is younger than `ttl`.
    pub fn is_cache_valid(&self, ttl: Duration) -> bool {
        self.cache.as_ref().is_some_and(|cached| cached.is_valid(ttl))
    }

    /// When the current snapshot was fetched, if there is one.
    pub fn cached_at(&self) -> Option<DateTime<Utc>> {
        self.cache.as_ref().map(|cached| cached.cached_at)
    }

    /// Drops the snapshot; the next call fetches and has nothing to fall back on.
    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    /// Installs a snapshot as if it had been fetched at `cached_at`.
    pub fn seed_cache(&mut self, teams: Vec<Team>, cached_at: DateTime<Utc>) {
        self.cache = Some(CachedTeams::with_timestamp(teams, cached_at));
    }
}
