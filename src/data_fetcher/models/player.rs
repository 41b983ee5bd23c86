use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::responses::ApiPlayer;

/// Format of `dateOfBirth` in provider payloads
const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

/// A squad member. Built once from the provider record; `age` is frozen at
/// construction and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<String>,
    pub age: Option<u32>,
}

impl Player {
    /// Maps a provider record into a player, deriving the age as of `today`.
    pub fn from_api_data(data: ApiPlayer, today: NaiveDate) -> Self {
        let age = calculate_age(data.date_of_birth.as_deref(), today);
        Player {
            id: data.id.unwrap_or_default(),
            name: data.name.unwrap_or_default(),
            position: data.position,
            nationality: data.nationality,
            date_of_birth: data.date_of_birth,
            age,
        }
    }

    /// Case-insensitive substring test against the player's position label.
    /// Players without a position never match.
    pub fn plays_position(&self, position_query: &str) -> bool {
        let needle = position_query.to_lowercase();
        self.position
            .as_deref()
            .is_some_and(|position| position.to_lowercase().contains(&needle))
    }
}

/// Whole years between `date_of_birth` and `today`.
///
/// Returns `None` when the date is missing, unparsable, or lies in the future.
pub fn calculate_age(date_of_birth: Option<&str>, today: NaiveDate) -> Option<u32> {
    let raw = date_of_birth.filter(|s| !s.is_empty())?;
    let birth_date = NaiveDate::parse_from_str(raw, DATE_OF_BIRTH_FORMAT).ok()?;

    let before_birthday = (today.month(), today.day()) < (birth_date.month(), birth_date.day());
    let age = today.year() - birth_date.year() - i32::from(before_birthday);

    u32::try_from(age).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_calculate_age_after_birthday() {
        assert_eq!(calculate_age(Some("1993-07-28"), date(2025, 9, 19)), Some(32));
    }

    #[test]
    fn test_calculate_age_before_birthday() {
        assert_eq!(calculate_age(Some("1993-07-28"), date(2025, 6, 15)), Some(31));
    }

    #[test]
    fn test_calculate_age_on_birthday() {
        assert_eq!(calculate_age(Some("1993-07-28"), date(2025, 7, 28)), Some(32));
    }

    #[test]
    fn test_calculate_age_same_month_day_before() {
        assert_eq!(calculate_age(Some("1993-07-28"), date(2025, 7, 27)), Some(31));
    }

    #[test]
    fn test_calculate_age_leap_day_birth() {
        assert_eq!(calculate_age(Some("2000-02-29"), date(2025, 2, 28)), Some(24));
        assert_eq!(calculate_age(Some("2000-02-29"), date(2025, 3, 1)), Some(25));
    }

    #[test]
    fn test_calculate_age_born_today() {
        assert_eq!(calculate_age(Some("2025-09-19"), date(2025, 9, 19)), Some(0));
    }

    #[test]
    fn test_calculate_age_missing_or_invalid() {
        let today = date(2025, 9, 19);
        assert_eq!(calculate_age(None, today), None);
        assert_eq!(calculate_age(Some(""), today), None);
        assert_eq!(calculate_age(Some("invalid-date"), today), None);
        assert_eq!(calculate_age(Some("1993-13-01"), today), None);
        assert_eq!(calculate_age(Some("28/07/1993"), today), None);
    }

    #[test]
    fn test_calculate_age_future_date() {
        assert_eq!(calculate_age(Some("2030-01-01"), date(2025, 9, 19)), None);
    }

    #[test]
    fn test_from_api_data_full_record() {
        let raw = ApiPlayer {
            id: Some(3754),
            name: Some("Mohamed Salah".to_string()),
            position: Some("Right Winger".to_string()),
            nationality: Some("Egypt".to_string()),
            date_of_birth: Some("1992-06-15".to_string()),
        };

        let player = Player::from_api_data(raw, date(2025, 9, 19));

        assert_eq!(player.id, 3754);
        assert_eq!(player.name, "Mohamed Salah");
        assert_eq!(player.position.as_deref(), Some("Right Winger"));
        assert_eq!(player.nationality.as_deref(), Some("Egypt"));
        assert_eq!(player.date_of_birth.as_deref(), Some("1992-06-15"));
        assert_eq!(player.age, Some(33));
    }

    #[test]
    fn test_from_api_data_defaults() {
        let player = Player::from_api_data(ApiPlayer::default(), date(2025, 9, 19));

        assert_eq!(player.id, 0);
        assert_eq!(player.name, "");
        assert!(player.position.is_none());
        assert!(player.nationality.is_none());
        assert!(player.date_of_birth.is_none());
        assert!(player.age.is_none());
    }

    #[test]
    fn test_from_api_data_keeps_unparsable_date() {
        let raw = ApiPlayer {
            name: Some("Test Player".to_string()),
            date_of_birth: Some("unknown".to_string()),
            ..Default::default()
        };

        let player = Player::from_api_data(raw, date(2025, 9, 19));
        assert_eq!(player.date_of_birth.as_deref(), Some("unknown"));
        assert!(player.age.is_none());
    }

    #[test]
    fn test_plays_position() {
        let mut player = Player::from_api_data(ApiPlayer::default(), date(2025, 1, 1));
        assert!(!player.plays_position("Winger"));

        player.position = Some("Right Winger".to_string());
        assert!(player.plays_position("Winger"));
        assert!(player.plays_position("winger"));
        assert!(player.plays_position("RIGHT"));
        assert!(!player.plays_position("Left"));
    }
}
