//! Wire format of the API-Football v3 endpoints.
//!
//! Every field is optional or defaulted: the provider omits keys and sends
//! `null` freely, and a missing value must never fail a whole lookup.

use serde::{Deserialize, Deserializer};

/// Deserializes `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Common envelope around every API-Football response.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    /// `[]` on success, an object keyed by error kind otherwise.
    #[serde(default)]
    pub errors: serde_json::Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response: Vec<T>,
}

impl<T> ApiEnvelope<T> {
    /// Returns true when the provider reported errors alongside the payload.
    pub fn has_errors(&self) -> bool {
        match &self.errors {
            serde_json::Value::Null => false,
            serde_json::Value::Array(items) => !items.is_empty(),
            serde_json::Value::Object(fields) => !fields.is_empty(),
            serde_json::Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiTeam {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoalTotals {
    #[serde(rename = "for")]
    pub scored: Option<u32>,
    pub against: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordStats {
    pub played: Option<u32>,
    pub win: Option<u32>,
    pub draw: Option<u32>,
    pub lose: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goals: GoalTotals,
}

/// One row of a league table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingRecord {
    pub rank: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team: ApiTeam,
    pub points: Option<u32>,
    #[serde(rename = "goalsDiff")]
    pub goals_diff: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub all: RecordStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsLeague {
    /// One table per group; a single-table league has exactly one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub standings: Vec<Vec<StandingRecord>>,
}

/// Element of the `/standings` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub league: StandingsLeague,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiVenue {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureInfo {
    /// Kickoff as ISO 8601, usually with an explicit offset.
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub venue: ApiVenue,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiLeague {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureTeams {
    #[serde(default, deserialize_with = "null_as_default")]
    pub home: ApiTeam,
    #[serde(default, deserialize_with = "null_as_default")]
    pub away: ApiTeam,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureGoals {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

/// Element of the `/fixtures` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub fixture: FixtureInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub league: ApiLeague,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: FixtureTeams,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goals: FixtureGoals,
}

pub type StandingsResponse = ApiEnvelope<StandingsEntry>;
pub type FixturesResponse = ApiEnvelope<FixtureEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standings_response_parses_provider_shape() {
        let body = r#"{
            "get": "standings",
            "errors": [],
            "results": 1,
            "response": [{
                "league": {
                    "id": 207,
                    "name": "Super League",
                    "season": 2024,
                    "standings": [[{
                        "rank": 1,
                        "team": {"id": 620, "name": "Lugano", "logo": "https://media.api-sports.io/football/teams/620.png"},
                        "points": 33,
                        "goalsDiff": 16,
                        "all": {"played": 15, "win": 10, "draw": 3, "lose": 2, "goals": {"for": 28, "against": 12}}
                    }]]
                }
            }]
        }"#;

        let parsed: StandingsResponse = serde_json::from_str(body).unwrap();
        assert!(!parsed.has_errors());
        let row = &parsed.response[0].league.standings[0][0];
        assert_eq!(row.rank, Some(1));
        assert_eq!(row.team.id, Some(620));
        assert_eq!(row.goals_diff, Some(16));
        assert_eq!(row.all.goals.scored, Some(28));
        assert_eq!(row.all.goals.against, Some(12));
    }

    #[test]
    fn test_fixture_extra_provider_keys_are_ignored() {
        let body = r#"{
            "response": [{
                "fixture": {"id": 1208123, "referee": "S. Schärer", "timezone": "UTC",
                            "date": "2025-11-30T15:30:00+00:00",
                            "venue": {"id": 1092, "name": "Letzigrund", "city": "Zürich"}},
                "league": {"id": 207, "name": "Super League", "country": "Switzerland", "season": 2025},
                "teams": {"home": {"id": 684, "name": "FC Zurich", "winner": null},
                          "away": {"id": 551, "name": "FC Basel 1893", "winner": null}},
                "goals": {"home": null, "away": null},
                "score": {"halftime": {"home": null, "away": null}}
            }]
        }"#;

        let parsed: FixturesResponse = serde_json::from_str(body).unwrap();
        let entry = &parsed.response[0];
        assert_eq!(entry.fixture.venue.name.as_deref(), Some("Letzigrund"));
        assert_eq!(entry.league.name.as_deref(), Some("Super League"));
        assert_eq!(entry.teams.away.id, Some(551));
    }

    #[test]
    fn test_nulls_and_missing_keys_default() {
        let body = r#"{
            "response": [{
                "fixture": {"id": 1, "date": null, "venue": null},
                "teams": {"home": null},
                "goals": {"home": null, "away": 2}
            }]
        }"#;

        let parsed: FixturesResponse = serde_json::from_str(body).unwrap();
        let entry = &parsed.response[0];
        assert!(entry.fixture.date.is_none());
        assert!(entry.fixture.venue.name.is_none());
        assert!(entry.teams.home.id.is_none());
        assert!(entry.teams.away.name.is_none());
        assert!(entry.league.name.is_none());
        assert_eq!(entry.goals.home, None);
        assert_eq!(entry.goals.away, Some(2));
    }

    #[test]
    fn test_null_response_is_empty() {
        let parsed: FixturesResponse = serde_json::from_str(r#"{"response": null}"#).unwrap();
        assert!(parsed.response.is_empty());
    }

    #[test]
    fn test_error_object_is_reported() {
        let body = r#"{"errors": {"token": "Error/Missing application key."}, "response": []}"#;
        let parsed: StandingsResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.has_errors());
        assert!(parsed.response.is_empty());
    }
}
