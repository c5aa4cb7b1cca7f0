use crate::stats_fetcher::models::{StandingRecord, StandingsEntry, StandingsRow};

/// Result of normalizing a league table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandingsSummary {
    /// Row of the tracked team, if it appears anywhere in the table.
    pub tracked: Option<StandingsRow>,
    /// Leading rows of the table in upstream order.
    pub rows: Vec<StandingsRow>,
}

/// Returns the main table of a standings response: the first group of the first league.
pub fn select_table(entries: &[StandingsEntry]) -> Option<&[StandingRecord]> {
    entries
        .first()
        .and_then(|entry| entry.league.standings.first())
        .map(Vec::as_slice)
}

/// Maps a provider table row to the canonical row, defaulting absent values.
pub fn to_standings_row(record: &StandingRecord) -> StandingsRow {
    let all = &record.all;
    StandingsRow {
        position: record.rank.unwrap_or(0),
        team_id: record.team.id,
        team_name: record.team.name.clone().unwrap_or_default(),
        crest: record.team.logo.clone().unwrap_or_default(),
        played: all.played.unwrap_or(0),
        won: all.win.unwrap_or(0),
        draw: all.draw.unwrap_or(0),
        lost: all.lose.unwrap_or(0),
        goals_for: all.goals.scored.unwrap_or(0),
        goals_against: all.goals.against.unwrap_or(0),
        goal_difference: record.goals_diff.unwrap_or(0),
        points: record.points.unwrap_or(0),
    }
}

/// Normalizes a league table.
///
/// The tracked team is looked up by provider id across the whole table, so
/// spelling differences in its name never matter. The display rows are the
/// first `limit` rows as delivered, without filtering or re-sorting.
pub fn normalize_standings(table: &[StandingRecord], team_id: u64, limit: usize) -> StandingsSummary {
    let tracked = table
        .iter()
        .find(|record| record.team.id == Some(team_id))
        .map(to_standings_row);

    let rows = table.iter().take(limit).map(to_standings_row).collect();

    StandingsSummary { tracked, rows }
}
