use chrono::NaiveDate;
use serde::Serialize;

use super::player::Player;
use super::responses::ApiTeam;

/// A club and its squad, built in one pass from a provider record.
/// The squad is owned exclusively by this team and is never null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub short_name: Option<String>,
    /// Three Letter Abbreviation
    pub tla: Option<String>,
    pub founded: Option<i32>,
    pub club_colors: Option<String>,
    pub venue: Option<String>,
    pub squad: Vec<Player>,
}

impl Team {
    /// Maps a provider record (including nested players) into a team.
    /// Player ages are computed as of `today`.
    pub fn from_api_data(data: ApiTeam, today: NaiveDate) -> Self {
        let squad = data
            .squad
            .unwrap_or_default()
            .into_iter()
            .map(|player| Player::from_api_data(player, today))
            .collect();

        Team {
            id: data.id.unwrap_or_default(),
            name: data.name.unwrap_or_default(),
            short_name: data.short_name,
            tla: data.tla,
            founded: data.founded,
            club_colors: data.club_colors,
            venue: data.venue,
            squad,
        }
    }

    /// Names the team can be matched by: full name, then short name and TLA when present.
    pub fn match_candidates(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.short_name.as_deref())
            .chain(self.tla.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::ApiPlayer;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 19).unwrap()
    }

    fn liverpool_record() -> ApiTeam {
        ApiTeam {
            id: Some(64),
            name: Some("Liverpool FC".to_string()),
            short_name: Some("Liverpool".to_string()),
            tla: Some("LIV".to_string()),
            founded: Some(1892),
            club_colors: Some("Red / White".to_string()),
            venue: Some("Anfield".to_string()),
            squad: Some(vec![
                ApiPlayer {
                    id: Some(1),
                    name: Some("Alisson".to_string()),
                    position: Some("Goalkeeper".to_string()),
                    ..Default::default()
                },
                ApiPlayer {
                    id: Some(2),
                    name: Some("Mohamed Salah".to_string()),
                    position: Some("Right Winger".to_string()),
                    date_of_birth: Some("1992-06-15".to_string()),
                    ..Default::default()
                },
            ]),
        }
    }

    #[test]
    fn test_from_api_data_full_record() {
        let team = Team::from_api_data(liverpool_record(), today());

        assert_eq!(team.id, 64);
        assert_eq!(team.name, "Liverpool FC");
        assert_eq!(team.short_name.as_deref(), Some("Liverpool"));
        assert_eq!(team.tla.as_deref(), Some("LIV"));
        assert_eq!(team.founded, Some(1892));
        assert_eq!(team.club_colors.as_deref(), Some("Red / White"));
        assert_eq!(team.venue.as_deref(), Some("Anfield"));
        assert_eq!(team.squad.len(), 2);
        assert_eq!(team.squad[0].name, "Alisson");
        assert_eq!(team.squad[1].age, Some(33));
    }

    #[test]
    fn test_from_api_data_missing_squad() {
        let mut record = liverpool_record();
        record.squad = None;

        let team = Team::from_api_data(record, today());
        assert!(team.squad.is_empty());
    }

    #[test]
    fn test_from_api_data_empty_squad() {
        let mut record = liverpool_record();
        record.squad = Some(vec![]);

        let team = Team::from_api_data(record, today());
        assert!(team.squad.is_empty());
    }

    #[test]
    fn test_from_api_data_defaults() {
        let team = Team::from_api_data(ApiTeam::default(), today());

        assert_eq!(team.id, 0);
        assert_eq!(team.name, "");
        assert!(team.short_name.is_none());
        assert!(team.tla.is_none());
        assert!(team.founded.is_none());
        assert!(team.squad.is_empty());
    }

    #[test]
    fn test_match_candidates() {
        let team = Team::from_api_data(liverpool_record(), today());
        let candidates: Vec<&str> = team.match_candidates().collect();
        assert_eq!(candidates, vec!["Liverpool FC", "Liverpool", "LIV"]);

        let bare = Team::from_api_data(
            ApiTeam {
                name: Some("Test FC".to_string()),
                ..Default::default()
            },
            today(),
        );
        assert_eq!(bare.match_candidates().collect::<Vec<_>>(), vec!["Test FC"]);
    }
}
