use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::data_fetcher::models::{Player, Team, calculate_age};

/// Date fixture ages are computed against
pub const FIXTURE_DATE: (i32, u32, u32) = (2025, 9, 19);

/// Test utilities for creating mock teams, players and provider payloads
pub struct TestDataBuilder;

impl TestDataBuilder {
    fn fixture_date() -> NaiveDate {
        let (year, month, day) = FIXTURE_DATE;
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
    }

    /// Creates a player with only a name and an optional position
    pub fn player(id: i64, name: &str, position: Option<&str>) -> Player {
        Player {
            id,
            name: name.to_string(),
            position: position.map(str::to_string),
            nationality: None,
            date_of_birth: None,
            age: None,
        }
    }

    /// Creates a fully populated player; the age is derived as of [`FIXTURE_DATE`]
    pub fn player_with_details(
        id: i64,
        name: &str,
        position: &str,
        nationality: &str,
        date_of_birth: &str,
    ) -> Player {
        Player {
            id,
            name: name.to_string(),
            position: Some(position.to_string()),
            nationality: Some(nationality.to_string()),
            date_of_birth: Some(date_of_birth.to_string()),
            age: calculate_age(Some(date_of_birth), Self::fixture_date()),
        }
    }

    /// Creates a team with the given identity and squad, other attributes unset
    pub fn team(
        id: i64,
        name: &str,
        short_name: Option<&str>,
        tla: Option<&str>,
        squad: Vec<Player>,
    ) -> Team {
        Team {
            id,
            name: name.to_string(),
            short_name: short_name.map(str::to_string),
            tla: tla.map(str::to_string),
            founded: None,
            club_colors: None,
            venue: None,
            squad,
        }
    }

    /// Liverpool with a goalkeeper, a centre-back and two wingers
    pub fn liverpool() -> Team {
        Team {
            founded: Some(1892),
            club_colors: Some("Red / White".to_string()),
            venue: Some("Anfield".to_string()),
            ..Self::team(
                64,
                "Liverpool FC",
                Some("Liverpool"),
                Some("LIV"),
                vec![
                    Self::player_with_details(
                        3155,
                        "Alisson Becker",
                        "Goalkeeper",
                        "Brazil",
                        "1992-10-02",
                    ),
                    Self::player_with_details(
                        7861,
                        "Virgil van Dijk",
                        "Centre-Back",
                        "Netherlands",
                        "1991-07-08",
                    ),
                    Self::player_with_details(
                        3754,
                        "Mohamed Salah",
                        "Right Winger",
                        "Egypt",
                        "1992-06-15",
                    ),
                    Self::player_with_details(
                        16275,
                        "Luis Díaz",
                        "Left Winger",
                        "Colombia",
                        "1997-01-13",
                    ),
                ],
            )
        }
    }

    /// Manchester United with a midfielder and a goalkeeper
    pub fn man_united() -> Team {
        Team {
            founded: Some(1878),
            club_colors: Some("Red / White".to_string()),
            venue: Some("Old Trafford".to_string()),
            ..Self::team(
                66,
                "Manchester United FC",
                Some("Man United"),
                Some("MUN"),
                vec![
                    Self::player_with_details(
                        3257,
                        "Bruno Fernandes",
                        "Attacking Midfield",
                        "Portugal",
                        "1994-09-08",
                    ),
                    Self::player_with_details(
                        4390,
                        "André Onana",
                        "Goalkeeper",
                        "Cameroon",
                        "1996-04-02",
                    ),
                ],
            )
        }
    }

    /// Arsenal with an empty squad
    pub fn arsenal() -> Team {
        Team {
            founded: Some(1886),
            venue: Some("Emirates Stadium".to_string()),
            ..Self::team(57, "Arsenal FC", Some("Arsenal"), Some("ARS"), vec![])
        }
    }

    /// Liverpool, Manchester United and Arsenal, in that order
    pub fn premier_league() -> Vec<Team> {
        vec![Self::liverpool(), Self::man_united(), Self::arsenal()]
    }

    /// Provider body for the teams endpoint containing `teams`
    pub fn teams_json(teams: &[Team]) -> Value {
        let teams: Vec<Value> = teams
            .iter()
            .map(|team| {
                let squad: Vec<Value> = team
                    .squad
                    .iter()
                    .map(|player| {
                        json!({
                            "id": player.id,
                            "name": player.name,
                            "position": player.position,
                            "nationality": player.nationality,
                            "dateOfBirth": player.date_of_birth,
                        })
                    })
                    .collect();

                json!({
                    "id": team.id,
                    "name": team.name,
                    "shortName": team.short_name,
                    "tla": team.tla,
                    "founded": team.founded,
                    "clubColors": team.club_colors,
                    "venue": team.venue,
                    "squad": squad,
                })
            })
            .collect();

        json!({ "count": teams.len(), "teams": teams })
    }
}
