use super::time_formatting::format_match_date;
use crate::constants::PLACEHOLDER;
use crate::stats_fetcher::models::{
    ApiTeam, FixtureEntry, MatchOutcome, NextMatch, RecentMatchResult,
};

fn or_placeholder(value: Option<&String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Team name with a fallback for fixtures that lack one.
fn team_name(team: &ApiTeam) -> String {
    team.name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or("Unknown")
        .to_string()
}

/// Maps the soonest upcoming fixture to the canonical next match.
/// Missing fields become `"TBD"` instead of being left out.
pub fn normalize_next_match(entry: &FixtureEntry) -> NextMatch {
    NextMatch {
        home_team: or_placeholder(entry.teams.home.name.as_ref()),
        away_team: or_placeholder(entry.teams.away.name.as_ref()),
        kickoff: or_placeholder(entry.fixture.date.as_ref()),
        competition: or_placeholder(entry.league.name.as_ref()),
        venue: or_placeholder(entry.fixture.venue.name.as_ref()),
    }
}

/// Maps a finished fixture to a result from the tracked team's point of view.
///
/// The home side is identified by comparing provider ids. A fixture where
/// neither side carries the tracked id is read as an away match.
pub fn normalize_recent_match(entry: &FixtureEntry, team_id: u64) -> RecentMatchResult {
    let home = &entry.teams.home;
    let away = &entry.teams.away;
    let home_goals = entry.goals.home.unwrap_or(0);
    let away_goals = entry.goals.away.unwrap_or(0);

    let is_home = home.id == Some(team_id);
    let (opponent, team_goals, opponent_goals) = if is_home {
        (away, home_goals, away_goals)
    } else {
        (home, away_goals, home_goals)
    };

    RecentMatchResult {
        opponent: team_name(opponent),
        outcome: MatchOutcome::from_goals(team_goals, opponent_goals),
        score: format!("{home_goals}-{away_goals}"),
        date: format_match_date(entry.fixture.date.as_deref().unwrap_or("")),
    }
}

/// Normalizes up to `limit` finished fixtures, keeping the upstream order.
pub fn normalize_recent_matches(
    entries: &[FixtureEntry],
    team_id: u64,
    limit: usize,
) -> Vec<RecentMatchResult> {
    entries
        .iter()
        .take(limit)
        .map(|entry| normalize_recent_match(entry, team_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats_fetcher::models::FixturesResponse;

    const FCZ: u64 = 684;

    fn fixture(home: (u64, &str), away: (u64, &str), goals: (u32, u32), date: &str) -> FixtureEntry {
        let body = serde_json::json!({
            "fixture": {"id": 1, "date": date, "venue": {"name": "Letzigrund", "city": "Zürich"}},
            "league": {"id": 207, "name": "Super League"},
            "teams": {
                "home": {"id": home.0, "name": home.1},
                "away": {"id": away.0, "name": away.1}
            },
            "goals": {"home": goals.0, "away": goals.1}
        });
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_home_win() {
        let entry = fixture((FCZ, "FC Zürich"), (630, "FC St. Gallen"), (3, 1), "2024-11-09T18:00:00+00:00");
        let result = normalize_recent_match(&entry, FCZ);

        assert_eq!(result.opponent, "FC St. Gallen");
        assert_eq!(result.outcome, MatchOutcome::Win);
        assert_eq!(result.score, "3-1");
        assert_eq!(result.date, "2024-11-09");
    }

    #[test]
    fn test_away_loss_keeps_home_away_score_order() {
        let entry = fixture((620, "FC Lugano"), (FCZ, "FC Zürich"), (2, 1), "2024-11-23T15:30:00Z");
        let result = normalize_recent_match(&entry, FCZ);

        assert_eq!(result.opponent, "FC Lugano");
        assert_eq!(result.outcome, MatchOutcome::Loss);
        assert_eq!(result.score, "2-1");
    }

    #[test]
    fn test_away_win() {
        let entry = fixture((620, "FC Lugano"), (FCZ, "FC Zürich"), (1, 3), "2024-11-23T15:30:00Z");
        let result = normalize_recent_match(&entry, FCZ);
        assert_eq!(result.outcome, MatchOutcome::Win);
        assert_eq!(result.score, "1-3");
    }

    #[test]
    fn test_draw_on_either_side() {
        let home = fixture((FCZ, "FC Zürich"), (2, "Servette FC"), (2, 2), "2024-11-02T17:00:00Z");
        let away = fixture((2, "Servette FC"), (FCZ, "FC Zürich"), (2, 2), "2024-11-02T17:00:00Z");
        assert_eq!(normalize_recent_match(&home, FCZ).outcome, MatchOutcome::Draw);
        assert_eq!(normalize_recent_match(&away, FCZ).outcome, MatchOutcome::Draw);
    }

    #[test]
    fn test_home_detected_by_id_not_name() {
        let entry = fixture((FCZ, "FC Zurich"), (620, "FC Lugano"), (1, 0), "2024-10-01T18:00:00Z");
        let result = normalize_recent_match(&entry, FCZ);
        assert_eq!(result.opponent, "FC Lugano");
        assert_eq!(result.outcome, MatchOutcome::Win);
    }

    #[test]
    fn test_missing_goals_count_as_zero() {
        let entry: FixtureEntry = serde_json::from_value(serde_json::json!({
            "fixture": {"date": "not-a-date"},
            "teams": {"home": {"id": FCZ, "name": "FC Zürich"}, "away": {"id": 7}},
            "goals": {"home": null, "away": 1}
        }))
        .unwrap();
        let result = normalize_recent_match(&entry, FCZ);

        assert_eq!(result.score, "0-1");
        assert_eq!(result.outcome, MatchOutcome::Loss);
        assert_eq!(result.opponent, "Unknown");
        assert_eq!(result.date, "not-a-date");
    }

    #[test]
    fn test_recent_matches_respect_limit_and_order() {
        let entries: Vec<FixtureEntry> = (0..7)
            .map(|i| fixture((FCZ, "FC Zürich"), (100 + i, "Opponent"), (i as u32, 0), "2024-10-01T18:00:00Z"))
            .collect();
        let results = normalize_recent_matches(&entries, FCZ, 5);

        assert_eq!(results.len(), 5);
        let scores: Vec<&str> = results.iter().map(|r| r.score.as_str()).collect();
        assert_eq!(scores, vec!["0-0", "1-0", "2-0", "3-0", "4-0"]);
    }

    #[test]
    fn test_next_match_mapping() {
        let entry = fixture((FCZ, "FC Zürich"), (565, "BSC Young Boys"), (0, 0), "2024-12-07T17:30:00+00:00");
        let next = normalize_next_match(&entry);

        assert_eq!(next.home_team, "FC Zürich");
        assert_eq!(next.away_team, "BSC Young Boys");
        assert_eq!(next.kickoff, "2024-12-07T17:30:00+00:00");
        assert_eq!(next.competition, "Super League");
        assert_eq!(next.venue, "Letzigrund");
    }

    #[test]
    fn test_next_match_missing_fields_become_placeholders() {
        let response: FixturesResponse =
            serde_json::from_str(r#"{"response": [{"fixture": {"venue": null}, "teams": {}}]}"#).unwrap();
        let next = normalize_next_match(&response.response[0]);
        assert_eq!(next, NextMatch::default());
    }
}
