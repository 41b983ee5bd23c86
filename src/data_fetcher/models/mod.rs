pub mod player;
pub mod responses;
pub mod team;

pub use player::{Player, calculate_age};
pub use responses::{ApiPlayer, ApiTeam, TeamsResponse};
pub use team::Team;

use chrono::NaiveDate;

/// Converts a decoded teams response into domain teams, preserving provider order.
pub fn teams_from_response(response: TeamsResponse, today: NaiveDate) -> Vec<Team> {
    response
        .into_teams()
        .into_iter()
        .map(|team| Team::from_api_data(team, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teams_from_response_preserves_order() {
        let json = r#"{"teams": [
            {"id": 1, "name": "Liverpool FC", "squad": []},
            {"id": 2, "name": "Manchester United FC"}
        ]}"#;
        let response: TeamsResponse = serde_json::from_str(json).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 9, 19).unwrap();

        let teams = teams_from_response(response, today);
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name, "Liverpool FC");
        assert_eq!(teams[1].name, "Manchester United FC");
        assert!(teams[1].squad.is_empty());
    }

    #[test]
    fn test_teams_from_empty_response() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 19).unwrap();
        assert!(teams_from_response(TeamsResponse::default(), today).is_empty());
    }
}
