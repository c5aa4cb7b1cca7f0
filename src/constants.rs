//! Application-wide constants and configuration values
//!
//! This module centralizes the tracked team, the upstream API identifiers and
//! the defaults used when nothing else is configured.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Default base URL of API-Football
pub const DEFAULT_API_BASE_URL: &str = "https://v3.football.api-sports.io";

/// Value of the `x-rapidapi-host` header expected by API-Football
pub const API_HOST: &str = "v3.football.api-sports.io";

/// Header carrying the API credential
pub const API_KEY_HEADER: &str = "x-rapidapi-key";

/// Header naming the API host
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Placeholder shown for values the API did not provide
pub const PLACEHOLDER: &str = "TBD";

/// The tracked team and its league
pub mod team {
    /// Display name of the tracked team
    pub const NAME: &str = "FC Zürich";

    /// Stable API-Football team identifier
    pub const ID: u64 = 684;

    /// Stable API-Football league identifier (Swiss Super League)
    pub const LEAGUE_ID: u64 = 207;

    /// Display name of the league
    pub const LEAGUE_NAME: &str = "Swiss Super League";
}

/// Limits applied while normalizing API payloads
pub mod limits {
    /// Number of league table rows kept for display
    pub const STANDINGS_ROWS: usize = 10;

    /// Number of finished fixtures requested for the recent results list
    pub const RECENT_MATCHES: usize = 5;

    /// Number of upcoming fixtures requested for the next match
    pub const NEXT_MATCHES: usize = 1;
}

/// Season calendar
pub mod season {
    /// First month of a new season (July)
    pub const START_MONTH: u32 = 7;
}

/// Environment variable names
pub mod env_vars {
    /// API-Football credential
    pub const API_KEY: &str = "FOOTBALL_API_KEY";

    /// Override for the API base URL
    pub const API_URL: &str = "FCZ_STATS_API_URL";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "FCZ_STATS_HTTP_TIMEOUT";

    /// Override for the log file path
    pub const LOG_FILE: &str = "FCZ_STATS_LOG_FILE";
}
