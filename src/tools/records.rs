//! Presentation records rendered as JSON by [`FootballTools`](super::FootballTools).
//!
//! Keys are the human-readable labels callers display verbatim. Optional
//! attributes are passed through as `null` when absent.

use serde::Serialize;

use crate::data_fetcher::models::{Player, Team};

/// Rendered in place of a team name when a player has no resolvable team
pub const NO_TEAM: &str = "N/A";

#[derive(Debug, Serialize)]
pub struct PlayerInfo<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Team")]
    pub team: &'a str,
    #[serde(rename = "Position")]
    pub position: Option<&'a str>,
    #[serde(rename = "Date of Birth")]
    pub date_of_birth: Option<&'a str>,
    #[serde(rename = "Age")]
    pub age: Option<u32>,
    #[serde(rename = "Nationality")]
    pub nationality: Option<&'a str>,
}

impl<'a> PlayerInfo<'a> {
    pub fn new(player: &'a Player, team: Option<&'a Team>) -> Self {
        Self {
            name: &player.name,
            team: team.map_or(NO_TEAM, |team| team.name.as_str()),
            position: player.position.as_deref(),
            date_of_birth: player.date_of_birth.as_deref(),
            age: player.age,
            nationality: player.nationality.as_deref(),
        }
    }
}

/// A squad member inside [`TeamInfo`]
#[derive(Debug, Serialize)]
pub struct SquadPlayer<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Position")]
    pub position: Option<&'a str>,
    #[serde(rename = "Date of Birth")]
    pub date_of_birth: Option<&'a str>,
    #[serde(rename = "Age")]
    pub age: Option<u32>,
    #[serde(rename = "Nationality")]
    pub nationality: Option<&'a str>,
}

impl<'a> From<&'a Player> for SquadPlayer<'a> {
    fn from(player: &'a Player) -> Self {
        Self {
            name: &player.name,
            position: player.position.as_deref(),
            date_of_birth: player.date_of_birth.as_deref(),
            age: player.age,
            nationality: player.nationality.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamInfo<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Short Name")]
    pub short_name: Option<&'a str>,
    #[serde(rename = "TLA")]
    pub tla: Option<&'a str>,
    #[serde(rename = "Founded")]
    pub founded: Option<i32>,
    #[serde(rename = "Club Colors")]
    pub club_colors: Option<&'a str>,
    #[serde(rename = "Venue")]
    pub venue: Option<&'a str>,
    #[serde(rename = "Squad")]
    pub squad: Vec<SquadPlayer<'a>>,
}

impl<'a> From<&'a Team> for TeamInfo<'a> {
    fn from(team: &'a Team) -> Self {
        Self {
            name: &team.name,
            short_name: team.short_name.as_deref(),
            tla: team.tla.as_deref(),
            founded: team.founded,
            club_colors: team.club_colors.as_deref(),
            venue: team.venue.as_deref(),
            squad: team.squad.iter().map(SquadPlayer::from).collect(),
        }
    }
}

/// A player listed by a team and position lookup; the position is the filter
/// and is left out.
#[derive(Debug, Serialize)]
pub struct PositionPlayer<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Nationality")]
    pub nationality: Option<&'a str>,
    #[serde(rename = "Date of Birth")]
    pub date_of_birth: Option<&'a str>,
    #[serde(rename = "Age")]
    pub age: Option<u32>,
}

impl<'a> From<&'a Player> for PositionPlayer<'a> {
    fn from(player: &'a Player) -> Self {
        Self {
            name: &player.name,
            nationality: player.nationality.as_deref(),
            date_of_birth: player.date_of_birth.as_deref(),
            age: player.age,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PositionResult<'a> {
    pub team: &'a str,
    pub position: &'a str,
    pub count: usize,
    pub players: Vec<PositionPlayer<'a>>,
}

impl<'a> PositionResult<'a> {
    pub fn new(team: &'a str, position: &'a str, players: &[&'a Player]) -> Self {
        Self {
            team,
            position,
            count: players.len(),
            players: players.iter().map(|player| PositionPlayer::from(*player)).collect(),
        }
    }
}
