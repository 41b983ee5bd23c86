//! Fuzzy team and player lookup over football-data.org squads.
//!
//! This library fetches a competition's teams and squads, keeps the last
//! roster in a time-bounded cache with stale fallback, and resolves free-text
//! names to teams and players.
//!
//! # Examples
//!
//! ```rust,no_run
//! use squad_lookup::config::Config;
//! use squad_lookup::data_fetcher::api::FootballApiClient;
//! use squad_lookup::error::AppError;
//! use squad_lookup::tools::FootballTools;
//!
//! fn main() -> Result<(), AppError> {
//!     let config = Config::load()?;
//!     let mut client = FootballApiClient::new(&config)?;
//!
//!     let tools = FootballTools::from_client(&mut client, config.cache_ttl());
//!     println!("{}", tools.player_info("Salah"));
//!     println!("{}", tools.players_by_team_and_position("Liverpool, Winger"));
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod search;
pub mod testing_utils;
pub mod tools;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::FootballApiClient;
pub use data_fetcher::models::{Player, Team};
pub use error::AppError;
pub use search::SearchService;
pub use tools::FootballTools;
