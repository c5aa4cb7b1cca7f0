//! Team statistics from API-Football with a sample-data fallback

pub mod api;
pub mod fallback;
pub mod fetcher;
pub mod models;
pub mod processors;

pub use fallback::sample_statistics;
pub use fetcher::StatsFetcher;
pub use models::{
    DataSource, MatchOutcome, NextMatch, RecentMatchResult, StandingsRow, TeamStatistics,
};
pub use processors::format_date;
