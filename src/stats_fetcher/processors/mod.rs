//! Normalization of API-Football payloads into the canonical record

pub mod fixtures;
pub mod standings;
pub mod time_formatting;

pub use fixtures::{normalize_next_match, normalize_recent_match, normalize_recent_matches};
pub use standings::{StandingsSummary, normalize_standings, select_table, to_standings_row};
pub use time_formatting::{
    current_season, format_date, format_match_date, parse_iso_datetime, season_for_date,
    season_label,
};
