use serde::{Deserialize, Serialize};

/// Where the numbers on the page come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Live,
    Sample,
}

/// Result of a finished match from the tracked team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
    #[serde(rename = "D")]
    Draw,
}

impl MatchOutcome {
    /// Derives the outcome by comparing the team's goals with the opponent's.
    pub fn from_goals(team_goals: u32, opponent_goals: u32) -> Self {
        match team_goals.cmp(&opponent_goals) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// Single-letter form used in form guides.
    pub fn letter(&self) -> &'static str {
        match self {
            MatchOutcome::Win => "W",
            MatchOutcome::Loss => "L",
            MatchOutcome::Draw => "D",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchOutcome::Win => "win",
            MatchOutcome::Loss => "loss",
            MatchOutcome::Draw => "draw",
        }
    }
}

/// One team's line in the league table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub position: u32,
    /// Provider team id, absent for hand-authored rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<u64>,
    pub team_name: String,
    pub crest: String,
    pub played: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
}

/// The next scheduled fixture of the tracked team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextMatch {
    pub home_team: String,
    pub away_team: String,
    /// Kickoff as ISO 8601, formatted for display with `format_date`.
    pub kickoff: String,
    pub competition: String,
    pub venue: String,
}

impl Default for NextMatch {
    fn default() -> Self {
        let placeholder = crate::constants::PLACEHOLDER.to_string();
        NextMatch {
            home_team: placeholder.clone(),
            away_team: placeholder.clone(),
            kickoff: placeholder.clone(),
            competition: placeholder.clone(),
            venue: placeholder,
        }
    }
}

/// A finished match of the tracked team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentMatchResult {
    pub opponent: String,
    pub outcome: MatchOutcome,
    /// Always `home-away`, whichever side the tracked team played on.
    pub score: String,
    pub date: String,
}

/// Aggregate numbers for a subset of matches (home, away, a month).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRecord {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub month: String,
    #[serde(flatten)]
    pub record: SplitRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalsByMatchday {
    pub scored: Vec<u32>,
    pub conceded: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopScorer {
    pub name: String,
    pub goals: u32,
    pub assists: u32,
}

/// Extended season breakdown. Only the sample season carries it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonDetails {
    pub home: SplitRecord,
    pub away: SplitRecord,
    pub monthly: Vec<MonthlyRecord>,
    pub points_progression: Vec<u32>,
    pub goals_by_matchday: GoalsByMatchday,
    pub top_scorers: Vec<TopScorer>,
    pub clean_sheets: u32,
    pub avg_goals_per_match: f64,
    pub avg_conceded_per_match: f64,
    pub win_percentage: u32,
    pub form_last_5: Vec<MatchOutcome>,
}

/// Canonical statistics record handed to the presentation layer.
///
/// Every field has a usable default so a record is renderable no matter
/// how many upstream lookups succeeded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStatistics {
    pub team_name: String,
    pub league: String,
    pub season: String,
    pub source: DataSource,
    pub position: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    pub next_match: Option<NextMatch>,
    pub standings: Vec<StandingsRow>,
    pub recent_matches: Vec<RecentMatchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_details: Option<SeasonDetails>,
}

impl TeamStatistics {
    /// Empty live record for the tracked team, used as the base the lookups fill in.
    pub fn live_baseline(season: impl Into<String>) -> Self {
        TeamStatistics {
            team_name: crate::constants::team::NAME.to_string(),
            league: crate::constants::team::LEAGUE_NAME.to_string(),
            season: season.into(),
            source: DataSource::Live,
            ..TeamStatistics::default()
        }
    }

    /// Copies a table row into the summary fields.
    pub fn apply_summary(&mut self, row: &StandingsRow) {
        self.position = row.position;
        self.played = row.played;
        self.won = row.won;
        self.drawn = row.draw;
        self.lost = row.lost;
        self.goals_for = row.goals_for;
        self.goals_against = row.goals_against;
        self.goal_difference = row.goal_difference;
        self.points = row.points;
    }

    /// Form guide built from the recent results, most recent first.
    pub fn form(&self) -> Vec<MatchOutcome> {
        self.recent_matches.iter().map(|m| m.outcome).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_goals() {
        assert_eq!(MatchOutcome::from_goals(3, 1), MatchOutcome::Win);
        assert_eq!(MatchOutcome::from_goals(1, 3), MatchOutcome::Loss);
        assert_eq!(MatchOutcome::from_goals(2, 2), MatchOutcome::Draw);
        assert_eq!(MatchOutcome::from_goals(0, 0), MatchOutcome::Draw);
    }

    #[test]
    fn test_outcome_serializes_as_letter() {
        let json = serde_json::to_string(&MatchOutcome::Win).unwrap();
        assert_eq!(json, "\"W\"");
        assert_eq!(MatchOutcome::Loss.letter(), "L");
        assert_eq!(MatchOutcome::Draw.label(), "draw");
    }

    #[test]
    fn test_next_match_defaults_to_placeholders() {
        let next = NextMatch::default();
        assert_eq!(next.home_team, "TBD");
        assert_eq!(next.away_team, "TBD");
        assert_eq!(next.kickoff, "TBD");
        assert_eq!(next.competition, "TBD");
        assert_eq!(next.venue, "TBD");
    }

    #[test]
    fn test_live_baseline_is_zeroed() {
        let stats = TeamStatistics::live_baseline("2025/26");
        assert_eq!(stats.team_name, "FC Zürich");
        assert_eq!(stats.league, "Swiss Super League");
        assert_eq!(stats.season, "2025/26");
        assert_eq!(stats.source, DataSource::Live);
        assert_eq!(stats.position, 0);
        assert_eq!(stats.points, 0);
        assert_eq!(stats.goal_difference, 0);
        assert!(stats.next_match.is_none());
        assert!(stats.standings.is_empty());
        assert!(stats.recent_matches.is_empty());
        assert!(stats.season_details.is_none());
    }

    #[test]
    fn test_apply_summary_copies_row() {
        let row = StandingsRow {
            position: 4,
            team_id: Some(684),
            team_name: "FC Zürich".to_string(),
            crest: String::new(),
            played: 12,
            won: 6,
            draw: 3,
            lost: 3,
            goals_for: 20,
            goals_against: 14,
            goal_difference: 6,
            points: 21,
        };
        let mut stats = TeamStatistics::live_baseline("2025/26");
        stats.apply_summary(&row);

        assert_eq!(stats.position, 4);
        assert_eq!(stats.played, 12);
        assert_eq!(stats.drawn, 3);
        assert_eq!(stats.goal_difference, 6);
        assert_eq!(stats.points, 21);
    }

    #[test]
    fn test_monthly_record_flattens() {
        let monthly = MonthlyRecord {
            month: "Juli".to_string(),
            record: SplitRecord {
                played: 2,
                points: 4,
                ..SplitRecord::default()
            },
        };
        let value = serde_json::to_value(&monthly).unwrap();
        assert_eq!(value["month"], "Juli");
        assert_eq!(value["played"], 2);
        assert_eq!(value["points"], 4);
    }
}
