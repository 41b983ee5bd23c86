//! Query façade: turns search results into pretty-printed JSON or literal
//! messages. Every lookup answers with a string and never an error.

pub mod records;

use serde::Serialize;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::data_fetcher::api::FootballApiClient;
use crate::error::AppError;
use crate::search::SearchService;
use records::{PlayerInfo, PositionResult, TeamInfo};

pub const SERVICE_NOT_AVAILABLE: &str = "Search service is not available.";
pub const SERVICE_UNAVAILABLE_TEAM_DATA: &str = "Service unavailable: Failed to load team data.";
pub const TEAM_POSITION_USAGE: &str = "Please provide both team name and position in format: 'team_name, position' (e.g., 'Liverpool, Midfielder')";
pub const NO_POSITIONS_FOUND: &str = "No player positions found.";

const PLAYER_LOOKUP_FAILED: &str = "An error occurred while retrieving player information.";
const TEAM_LOOKUP_FAILED: &str = "An error occurred while retrieving team information.";
const POSITION_LOOKUP_FAILED: &str =
    "An error occurred while searching for players by team and position.";
const POSITION_LIST_FAILED: &str = "An error occurred while listing player positions.";

/// A named operation an external caller (agent or CLI) can invoke with one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
}

pub const PLAYER_INFO: &str = "Player_Info";
pub const TEAM_INFO: &str = "Team_Info";
pub const PLAYERS_BY_TEAM_AND_POSITION: &str = "Players_By_Team_And_Position";
pub const LIST_POSITIONS: &str = "List_Positions";

pub const TOOL_SPECS: &[ToolSpec] = &[
    ToolSpec {
        name: PLAYER_INFO,
        description: "Get detailed information about a specific player by name. Use this when asked about a specific player.",
    },
    ToolSpec {
        name: TEAM_INFO,
        description: "Get detailed information about a specific team including stadium, founding year, colors and squad. Use this when asked about a specific team.",
    },
    ToolSpec {
        name: PLAYERS_BY_TEAM_AND_POSITION,
        description: "Find all players of a team who play in a position (e.g. 'Goalkeeper', 'Defender', 'Midfielder', 'Winger'). Input format: 'team_name, position'.",
    },
    ToolSpec {
        name: LIST_POSITIONS,
        description: "List every player position label present in the current squads. Takes no input.",
    },
];

/// Splits `"<team>, <position>"` or `"<team> - <position>"` into trimmed parts.
///
/// A comma takes precedence over `" - "`. Returns `None` when neither
/// separator is present, when splitting yields anything but two parts, or
/// when either part is blank.
pub fn split_team_position(input: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = if input.contains(',') {
        input.split(',').collect()
    } else if input.contains(" - ") {
        input.split(" - ").collect()
    } else {
        return None;
    };

    match parts.as_slice() {
        [team, position] => {
            let (team, position) = (team.trim(), position.trim());
            (!team.is_empty() && !position.is_empty()).then_some((team, position))
        }
        _ => None,
    }
}

/// Serializes `value` as pretty JSON, or logs and returns `failure_message`.
fn render<T: Serialize>(value: &T, failure_message: &str) -> String {
    match serde_json::to_string_pretty(value).map_err(AppError::from) {
        Ok(json) => json,
        Err(e) => {
            error!("{}: {}", failure_message, e);
            failure_message.to_string()
        }
    }
}

/// Lookups over a search service built from one fetched snapshot.
///
/// Without a snapshot the façade is unavailable and every lookup returns the
/// matching "not available" message.
#[derive(Debug, Clone, Default)]
pub struct FootballTools {
    search: Option<SearchService>,
}

impl FootballTools {
    pub fn new(search: SearchService) -> Self {
        Self {
            search: Some(search),
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Builds the façade from one `get_teams` call. A data-source failure is
    /// logged and leaves the façade unavailable.
    pub fn from_client(client: &mut FootballApiClient, ttl: Duration) -> Self {
        match client.get_teams(true, ttl) {
            Ok(teams) => {
                info!("Search service initialized with {} teams", teams.len());
                Self::new(SearchService::new(teams))
            }
            Err(e) => {
                error!("Failed to initialize search service: {}", e);
                Self::unavailable()
            }
        }
    }

    /// Rebuilds the search service from a fresh `get_teams` call.
    ///
    /// On failure the current service, if any, is kept and the error returned.
    pub fn refresh(&mut self, client: &mut FootballApiClient, ttl: Duration) -> Result<(), AppError> {
        match client.get_teams(true, ttl) {
            Ok(teams) => {
                info!("Search service refreshed with {} teams", teams.len());
                self.search = Some(SearchService::new(teams));
                Ok(())
            }
            Err(e) => {
                warn!("Refresh failed, keeping current search service: {}", e);
                Err(e)
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.search.is_some()
    }

    pub fn search(&self) -> Option<&SearchService> {
        self.search.as_ref()
    }

    /// Player details as JSON, or a message when nothing matches.
    pub fn player_info(&self, player_name: &str) -> String {
        let Some(search) = &self.search else {
            return SERVICE_NOT_AVAILABLE.to_string();
        };

        match search.find_player(player_name) {
            Some((player, team)) => {
                render(&PlayerInfo::new(player, Some(team)), PLAYER_LOOKUP_FAILED)
            }
            None => format!("No player found matching '{player_name}'."),
        }
    }

    /// Team details and squad as JSON, or a message when nothing matches.
    pub fn team_info(&self, team_name: &str) -> String {
        let Some(search) = &self.search else {
            return SERVICE_NOT_AVAILABLE.to_string();
        };

        match search.find_team(team_name) {
            Some(team) => render(&TeamInfo::from(team), TEAM_LOOKUP_FAILED),
            None => format!("No team found matching '{team_name}'."),
        }
    }

    /// Players of a team in a position, from a combined `"<team>, <position>"` query.
    pub fn players_by_team_and_position(&self, query: &str) -> String {
        let Some(search) = &self.search else {
            return SERVICE_UNAVAILABLE_TEAM_DATA.to_string();
        };

        let Some((team_name, position)) = split_team_position(query) else {
            return TEAM_POSITION_USAGE.to_string();
        };

        let players = search.find_players_by_team_and_position(team_name, position);
        if players.is_empty() {
            return format!("No players found for team '{team_name}' in position '{position}'.");
        }

        render(
            &PositionResult::new(team_name, position, &players),
            POSITION_LOOKUP_FAILED,
        )
    }

    /// Distinct positions as a JSON array.
    pub fn list_positions(&self) -> String {
        let Some(search) = &self.search else {
            return SERVICE_NOT_AVAILABLE.to_string();
        };

        let positions = search.list_positions();
        if positions.is_empty() {
            return NO_POSITIONS_FOUND.to_string();
        }
        render(&positions, POSITION_LIST_FAILED)
    }

    /// Dispatches to the tool named in [`TOOL_SPECS`].
    pub fn call_tool(&self, name: &str, input: &str) -> String {
        match name {
            PLAYER_INFO => self.player_info(input),
            TEAM_INFO => self.team_info(input),
            PLAYERS_BY_TEAM_AND_POSITION => self.players_by_team_and_position(input),
            LIST_POSITIONS => self.list_positions(),
            _ => format!("Unknown tool: {name}"),
        }
    }
}
