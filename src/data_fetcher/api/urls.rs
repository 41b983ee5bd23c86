//! URL building utilities for API endpoints

/// Joins a base URL and an endpoint path with exactly one `/` between them.
///
/// # Example
/// ```
/// use squad_lookup::data_fetcher::api::join_url;
///
/// assert_eq!(join_url("https://api.example.com/v4/", "/teams"), "https://api.example.com/v4/teams");
/// assert_eq!(join_url("https://api.example.com/v4", "teams"), "https://api.example.com/v4/teams");
/// ```
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Endpoint path listing every team (with squads) of a competition.
pub fn teams_endpoint(competition_code: &str) -> String {
    format!("competitions/{competition_code}/teams")
}

/// Builds the teams URL for a competition.
///
/// # Example
/// ```
/// use squad_lookup::data_fetcher::api::build_teams_url;
///
/// let url = build_teams_url("http://api.football-data.org/v4/", "PL");
/// assert_eq!(url, "http://api.football-data.org/v4/competitions/PL/teams");
/// ```
pub fn build_teams_url(base_url: &str, competition_code: &str) -> String {
    join_url(base_url, &teams_endpoint(competition_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_normalizes_separators() {
        let expected = "https://api.football-data.org/v4/test-endpoint";
        assert_eq!(join_url("https://api.football-data.org/v4", "test-endpoint"), expected);
        assert_eq!(join_url("https://api.football-data.org/v4/", "test-endpoint"), expected);
        assert_eq!(join_url("https://api.football-data.org/v4", "/test-endpoint"), expected);
        assert_eq!(join_url("https://api.football-data.org/v4/", "/test-endpoint"), expected);
    }

    #[test]
    fn test_build_teams_url_other_competition() {
        assert_eq!(
            build_teams_url("https://api.football-data.org/v4", "PD"),
            "https://api.football-data.org/v4/competitions/PD/teams"
        );
    }
}
