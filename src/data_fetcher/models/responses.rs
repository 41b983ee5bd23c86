//! Provider payload types for the `competitions/{code}/teams` endpoint.
//!
//! Every field the domain treats as optional is optional here too, so a schema
//! drift on the provider side degrades to a default instead of a decode error.

use serde::{Deserialize, Serialize};

/// Top-level body of the teams endpoint. A missing or null `teams` key is an empty list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Option<Vec<ApiTeam>>,
}

impl TeamsResponse {
    /// Consumes the response, yielding its team records.
    pub fn into_teams(self) -> Vec<ApiTeam> {
        self.teams.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiTeam {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default)]
    pub founded: Option<i32>,
    #[serde(rename = "clubColors", default)]
    pub club_colors: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub squad: Option<Vec<ApiPlayer>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiPlayer {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<String>,
}
