pub mod api;
pub mod cache;
pub mod models;

pub use api::FootballApiClient;
pub use cache::CachedTeams;
pub use models::{Player, Team};
