//! Hand-authored sample season shown when live data is unavailable.
//!
//! The numbers describe a plausible Swiss Super League 2024/25 snapshot after
//! fifteen rounds. The summary is taken from the tracked team's table row and
//! the home/away and monthly splits add up to it.

use crate::constants::team;
use crate::stats_fetcher::models::{
    DataSource, GoalsByMatchday, MatchOutcome, MonthlyRecord, NextMatch, RecentMatchResult,
    SeasonDetails, SplitRecord, StandingsRow, TeamStatistics, TopScorer,
};

#[allow(clippy::too_many_arguments)]
fn row(
    position: u32,
    team_name: &str,
    won: u32,
    draw: u32,
    lost: u32,
    goals_for: u32,
    goals_against: u32,
    points: u32,
) -> StandingsRow {
    StandingsRow {
        position,
        team_id: None,
        team_name: team_name.to_string(),
        crest: String::new(),
        played: won + draw + lost,
        won,
        draw,
        lost,
        goals_for,
        goals_against,
        goal_difference: goals_for as i32 - goals_against as i32,
        points,
    }
}

fn recent(opponent: &str, outcome: MatchOutcome, score: &str, date: &str) -> RecentMatchResult {
    RecentMatchResult {
        opponent: opponent.to_string(),
        outcome,
        score: score.to_string(),
        date: date.to_string(),
    }
}

fn split(won: u32, drawn: u32, lost: u32, goals_for: u32, goals_against: u32) -> SplitRecord {
    SplitRecord {
        played: won + drawn + lost,
        won,
        drawn,
        lost,
        goals_for,
        goals_against,
        points: won * 3 + drawn,
    }
}

fn month(name: &str, record: SplitRecord) -> MonthlyRecord {
    MonthlyRecord {
        month: name.to_string(),
        record,
    }
}

fn scorer(name: &str, goals: u32, assists: u32) -> TopScorer {
    TopScorer {
        name: name.to_string(),
        goals,
        assists,
    }
}

fn season_details() -> SeasonDetails {
    use MatchOutcome::{Draw, Loss, Win};

    SeasonDetails {
        home: split(4, 2, 2, 14, 8),
        away: split(2, 2, 3, 8, 10),
        monthly: vec![
            month("Juli", split(1, 1, 0, 4, 2)),
            month("August", split(2, 1, 1, 7, 5)),
            month("September", split(1, 1, 1, 4, 4)),
            month("Oktober", split(1, 0, 2, 3, 4)),
            month("November", split(1, 1, 1, 4, 3)),
        ],
        points_progression: vec![4, 7, 10, 11, 14, 15, 16, 16, 17, 18, 18, 19, 22, 22, 22],
        goals_by_matchday: GoalsByMatchday {
            scored: vec![2, 2, 1, 2, 1, 1, 1, 0, 1, 1, 0, 1, 3, 0, 1],
            conceded: vec![1, 1, 2, 1, 1, 0, 1, 2, 1, 0, 2, 1, 1, 2, 2],
        },
        top_scorers: vec![
            scorer("Jonathan Okita", 6, 3),
            scorer("Juan José Perea", 5, 2),
            scorer("Labinot Bajrami", 4, 4),
            scorer("Mirlind Kryeziu", 3, 1),
            scorer("Nikola Katic", 2, 0),
        ],
        clean_sheets: 5,
        avg_goals_per_match: 1.47,
        avg_conceded_per_match: 1.20,
        win_percentage: 40,
        form_last_5: vec![Loss, Win, Draw, Win, Loss],
    }
}

/// Returns the sample season. Every call builds an identical, fresh record.
pub fn sample_statistics() -> TeamStatistics {
    use MatchOutcome::{Draw, Loss, Win};

    let standings = vec![
        row(1, "FC Lugano", 10, 3, 2, 28, 12, 33),
        row(2, "FC Basel 1893", 9, 4, 2, 30, 15, 31),
        row(3, "Servette FC", 8, 4, 3, 24, 14, 28),
        row(4, "BSC Young Boys", 7, 5, 3, 25, 16, 26),
        row(5, team::NAME, 6, 4, 5, 22, 18, 22),
        row(6, "FC St. Gallen", 5, 5, 5, 20, 20, 20),
        row(7, "FC Luzern", 5, 4, 6, 18, 22, 19),
        row(8, "FC Sion", 4, 5, 6, 16, 21, 17),
        row(9, "Grasshopper Club", 3, 4, 8, 14, 25, 13),
        row(10, "FC Winterthur", 2, 4, 9, 12, 28, 10),
    ];

    let mut stats = TeamStatistics {
        team_name: team::NAME.to_string(),
        league: team::LEAGUE_NAME.to_string(),
        season: "2024/25".to_string(),
        source: DataSource::Sample,
        next_match: Some(NextMatch {
            home_team: team::NAME.to_string(),
            away_team: "BSC Young Boys".to_string(),
            kickoff: "2024-12-07T17:30:00Z".to_string(),
            competition: team::LEAGUE_NAME.to_string(),
            venue: "Letzigrund".to_string(),
        }),
        recent_matches: vec![
            recent("FC Lugano", Loss, "1-2", "2024-11-23"),
            recent("FC St. Gallen", Win, "3-1", "2024-11-09"),
            recent("Servette FC", Draw, "1-1", "2024-11-02"),
            recent("FC Sion", Win, "2-0", "2024-10-26"),
            recent("FC Basel 1893", Loss, "0-1", "2024-10-19"),
        ],
        season_details: Some(season_details()),
        ..TeamStatistics::default()
    };

    if let Some(own_row) = standings.iter().find(|r| r.team_name == team::NAME) {
        stats.apply_summary(own_row);
    }
    stats.standings = standings;
    stats
}
