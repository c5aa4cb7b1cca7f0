pub mod api_football;
pub mod stats;

pub use api_football::{
    ApiEnvelope, ApiTeam, FixtureEntry, FixturesResponse, StandingRecord, StandingsEntry,
    StandingsResponse,
};
pub use stats::{
    DataSource, GoalsByMatchday, MatchOutcome, MonthlyRecord, NextMatch, RecentMatchResult,
    SeasonDetails, SplitRecord, StandingsRow, TeamStatistics, TopScorer,
};
