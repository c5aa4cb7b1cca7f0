//! URL building utilities for API-Football endpoints

/// Builds the league table URL for a season.
///
/// # Example
/// ```
/// use fcz_stats::stats_fetcher::api::build_standings_url;
///
/// let url = build_standings_url("https://api.example.com", 207, 2024);
/// assert_eq!(url, "https://api.example.com/standings?league=207&season=2024");
/// ```
pub fn build_standings_url(base_url: &str, league_id: u64, season: i32) -> String {
    format!("{base_url}/standings?league={league_id}&season={season}")
}

/// Builds the URL listing a team's next `count` scheduled fixtures.
///
/// # Example
/// ```
/// use fcz_stats::stats_fetcher::api::build_next_fixtures_url;
///
/// let url = build_next_fixtures_url("https://api.example.com", 684, 1);
/// assert_eq!(url, "https://api.example.com/fixtures?team=684&next=1");
/// ```
pub fn build_next_fixtures_url(base_url: &str, team_id: u64, count: usize) -> String {
    format!("{base_url}/fixtures?team={team_id}&next={count}")
}

/// Builds the URL listing a team's last `count` finished fixtures.
///
/// # Example
/// ```
/// use fcz_stats::stats_fetcher::api::build_last_fixtures_url;
///
/// let url = build_last_fixtures_url("https://api.example.com", 684, 5);
/// assert_eq!(url, "https://api.example.com/fixtures?team=684&last=5");
/// ```
pub fn build_last_fixtures_url(base_url: &str, team_id: u64, count: usize) -> String {
    format!("{base_url}/fixtures?team={team_id}&last={count}")
}
