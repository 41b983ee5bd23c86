//! Fuzzy resolution of team and player names against a snapshot of teams.

pub mod service;
pub mod similarity;

pub use service::SearchService;
pub use similarity::similarity_ratio;
