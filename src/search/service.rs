use std::collections::BTreeSet;
use tracing::debug;

use super::similarity::similarity_ratio;
use crate::constants::search::{DEFAULT_PLAYER_THRESHOLD, DEFAULT_TEAM_THRESHOLD};
use crate::data_fetcher::models::{Player, Team};

/// Fuzzy lookups over one snapshot of teams.
///
/// The service never refreshes its teams; callers build a new one from a
/// fresh snapshot when they want newer data.
#[derive(Debug, Clone, Default)]
pub struct SearchService {
    teams: Vec<Team>,
}

/// Keeps the first candidate with the highest score at or above `threshold`.
///
/// A candidate only replaces the current best when it scores strictly higher,
/// so among equal scores the earliest one wins. Nothing scoring 0.0 is ever
/// selected.
fn best_match<'a, T>(
    query: &str,
    threshold: f64,
    candidates: impl Iterator<Item = (T, &'a str)>,
) -> Option<(T, f64)> {
    if query.trim().is_empty() {
        return None;
    }

    candidates.fold(None, |best, (item, text)| {
        let score = similarity_ratio(query, text);
        let best_score = best.as_ref().map_or(0.0, |(_, s)| *s);
        if score > best_score && score >= threshold {
            Some((item, score))
        } else {
            best
        }
    })
}

impl SearchService {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Best matching team by name, short name or TLA at the default threshold.
    pub fn find_team(&self, query: &str) -> Option<&Team> {
        self.find_team_with_threshold(query, DEFAULT_TEAM_THRESHOLD)
    }

    pub fn find_team_with_threshold(&self, query: &str, threshold: f64) -> Option<&Team> {
        let candidates = self
            .teams
            .iter()
            .flat_map(|team| team.match_candidates().map(move |text| (team, text)));

        let (team, score) = best_match(query, threshold, candidates)?;
        debug!("Matched team '{}' for '{}' (score {:.3})", team.name, query, score);
        Some(team)
    }

    /// Best matching player by name at the default threshold, with the team
    /// whose squad they belong to.
    pub fn find_player(&self, query: &str) -> Option<(&Player, &Team)> {
        self.find_player_with_threshold(query, DEFAULT_PLAYER_THRESHOLD)
    }

    pub fn find_player_with_threshold(
        &self,
        query: &str,
        threshold: f64,
    ) -> Option<(&Player, &Team)> {
        let candidates = self.teams.iter().flat_map(|team| {
            team.squad
                .iter()
                .map(move |player| ((player, team), player.name.as_str()))
        });

        let ((player, team), score) = best_match(query, threshold, candidates)?;
        debug!(
            "Matched player '{}' ({}) for '{}' (score {:.3})",
            player.name, team.name, query, score
        );
        Some((player, team))
    }

    /// Players of the team matching `team_query` whose position contains
    /// `position_query`, ignoring case, in squad order.
    ///
    /// An unresolved team gives an empty list.
    pub fn find_players_by_team_and_position(
        &self,
        team_query: &str,
        position_query: &str,
    ) -> Vec<&Player> {
        let Some(team) = self.find_team(team_query) else {
            debug!("No team resolved for '{}'", team_query);
            return Vec::new();
        };

        team.squad
            .iter()
            .filter(|player| player.plays_position(position_query))
            .collect()
    }

    /// Distinct non-empty positions across all squads, sorted.
    pub fn list_positions(&self) -> Vec<&str> {
        self.teams
            .iter()
            .flat_map(|team| team.squad.iter())
            .filter_map(|player| player.position.as_deref())
            .filter(|position| !position.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    fn service() -> SearchService {
        SearchService::new(TestDataBuilder::premier_league())
    }

    fn names(players: &[&Player]) -> Vec<String> {
        players.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_find_team_by_full_name() {
        let service = service();
        let team = service.find_team("Liverpool FC").unwrap();
        assert_eq!(team.name, "Liverpool FC");
    }

    #[test]
    fn test_find_team_by_short_name_and_tla() {
        let service = service();
        assert_eq!(service.find_team("Man United").unwrap().tla.as_deref(), Some("MUN"));
        assert_eq!(service.find_team("LIV").unwrap().name, "Liverpool FC");
        assert_eq!(service.find_team("ars").unwrap().name, "Arsenal FC");
    }

    #[test]
    fn test_find_team_fuzzy() {
        let service = service();
        assert_eq!(service.find_team("Man Utd").unwrap().name, "Manchester United FC");
        assert_eq!(service.find_team("liverpol").unwrap().name, "Liverpool FC");
    }

    #[test]
    fn test_find_team_below_threshold() {
        let service = service();
        assert!(service.find_team_with_threshold("Barcelona", 0.8).is_none());
        assert!(service.find_team("Real Madrid").is_none());
    }

    #[test]
    fn test_find_team_empty_inputs() {
        assert!(service().find_team("").is_none());
        assert!(service().find_team("   ").is_none());
        assert!(SearchService::default().find_team("Liverpool").is_none());
    }

    #[test]
    fn test_find_team_tie_keeps_first() {
        let first = TestDataBuilder::team(1, "Test FC", None, None, vec![]);
        let second = TestDataBuilder::team(2, "Test FC", None, None, vec![]);
        let service = SearchService::new(vec![first, second]);

        assert_eq!(service.find_team("Test FC").unwrap().id, 1);
    }

    #[test]
    fn test_find_team_higher_score_later_wins() {
        let near = TestDataBuilder::team(1, "Chelsea", None, None, vec![]);
        let exact = TestDataBuilder::team(2, "Chelsea FC", None, None, vec![]);
        let service = SearchService::new(vec![near, exact]);

        assert_eq!(service.find_team("Chelsea FC").unwrap().id, 2);
    }

    #[test]
    fn test_find_team_zero_threshold_still_needs_overlap() {
        let service = SearchService::new(vec![TestDataBuilder::team(1, "xyz", None, None, vec![])]);
        assert!(service.find_team_with_threshold("abc", 0.0).is_none());
    }

    #[test]
    fn test_find_player_exact_and_fuzzy() {
        let service = service();

        let (player, team) = service.find_player("Mohamed Salah").unwrap();
        assert_eq!(player.name, "Mohamed Salah");
        assert_eq!(team.name, "Liverpool FC");

        let (player, team) = service.find_player("bruno fernandez").unwrap();
        assert_eq!(player.name, "Bruno Fernandes");
        assert_eq!(team.name, "Manchester United FC");
    }

    #[test]
    fn test_find_player_below_threshold() {
        let service = service();
        assert!(service.find_player("Salah").is_none());
        assert!(service.find_player_with_threshold("Salah", 0.5).is_some());
        assert!(service.find_player("Lionel Messi").is_none());
        assert!(service.find_player("").is_none());
    }

    #[test]
    fn test_find_players_by_team_and_position_substring() {
        let service = service();
        let wingers = service.find_players_by_team_and_position("Liverpool FC", "Winger");
        assert_eq!(names(&wingers), vec!["Mohamed Salah", "Luis Díaz"]);

        let keepers = service.find_players_by_team_and_position("LIV", "goalkeeper");
        assert_eq!(names(&keepers), vec!["Alisson Becker"]);
    }

    #[test]
    fn test_find_players_by_team_and_position_no_results() {
        let service = service();
        assert!(service
            .find_players_by_team_and_position("Liverpool FC", "Striker")
            .is_empty());
        assert!(service
            .find_players_by_team_and_position("Arsenal", "Goalkeeper")
            .is_empty());
        assert!(service
            .find_players_by_team_and_position("Real Madrid", "Winger")
            .is_empty());
    }

    #[test]
    fn test_find_players_skips_missing_positions() {
        let squad = vec![
            TestDataBuilder::player(1, "No Position", None),
            TestDataBuilder::player(2, "Keeper", Some("Goalkeeper")),
        ];
        let service = SearchService::new(vec![TestDataBuilder::team(
            1,
            "Test FC",
            Some("Test"),
            Some("TST"),
            squad,
        )]);

        let all = service.find_players_by_team_and_position("Test FC", "");
        assert_eq!(names(&all), vec!["Keeper"]);
    }

    #[test]
    fn test_list_positions_sorted_and_distinct() {
        let service = service();
        assert_eq!(
            service.list_positions(),
            vec![
                "Attacking Midfield",
                "Centre-Back",
                "Goalkeeper",
                "Left Winger",
                "Right Winger"
            ]
        );
        assert!(SearchService::default().list_positions().is_empty());
    }
}
