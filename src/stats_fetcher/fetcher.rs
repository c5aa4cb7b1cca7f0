// src/stats_fetcher/fetcher.rs - Live lookups with sample-data fallback

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{error, info, instrument, warn};

use super::api::{
    build_last_fixtures_url, build_next_fixtures_url, build_standings_url,
    create_http_client_with_timeout, fetch,
};
use super::fallback::sample_statistics;
use super::models::{
    ApiEnvelope, FixtureEntry, NextMatch, RecentMatchResult, StandingsEntry, TeamStatistics,
};
use super::processors::{
    StandingsSummary, current_season, normalize_next_match, normalize_recent_matches,
    normalize_standings, season_label, select_table,
};
use crate::config::Config;
use crate::constants::{limits, team};
use crate::error::AppError;

/// Number of independent lookups on the live path.
const LOOKUP_COUNT: usize = 3;

/// Produces the statistics record for the tracked team.
///
/// With an API key the record is assembled from three independent lookups
/// (standings, next match, recent results). Without a key, or when no lookup
/// succeeds, the sample season is returned instead.
#[derive(Debug, Clone)]
pub struct StatsFetcher {
    api_key: Option<String>,
    base_url: String,
    timeout_seconds: u64,
}

impl StatsFetcher {
    pub fn new(config: &Config) -> Self {
        StatsFetcher {
            api_key: config.api_key().map(str::to_string),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout_seconds: config.http_timeout_seconds,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns the current statistics. Never fails.
    ///
    /// # Returns
    /// * Live data when at least one lookup succeeded; lookups that failed
    ///   leave their fields at the defaults
    /// * The sample season when no API key is configured or the live path
    ///   failed as a whole
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> TeamStatistics {
        let Some(api_key) = self.api_key.as_deref() else {
            info!("No API key configured, using sample data");
            return sample_statistics();
        };

        match self.fetch_live(api_key).await {
            Ok(stats) => stats,
            Err(e) => {
                error!("API Error: {e}. Falling back to sample data");
                sample_statistics()
            }
        }
    }

    /// Runs the live path.
    ///
    /// Each lookup is isolated: a failed lookup is logged and leaves its part
    /// of the record untouched. Only when every lookup fails is an error
    /// returned, so callers never see a record without any live data.
    pub async fn fetch_live(&self, api_key: &str) -> Result<TeamStatistics, AppError> {
        let client = create_http_client_with_timeout(self.timeout_seconds)?;
        let season = current_season();
        let mut stats = TeamStatistics::live_baseline(season_label(season));
        let mut failed = 0;

        match self.fetch_standings(&client, api_key, season).await {
            Ok(summary) => {
                match &summary.tracked {
                    Some(row) => stats.apply_summary(row),
                    None => warn!("Team {} not found in the {season} table", team::ID),
                }
                stats.standings = summary.rows;
            }
            Err(e) => {
                log_lookup_failure("standings", &e);
                failed += 1;
            }
        }

        match self.fetch_next_match(&client, api_key).await {
            Ok(next) => stats.next_match = Some(next),
            Err(e) => {
                log_lookup_failure("next match", &e);
                failed += 1;
            }
        }

        match self.fetch_recent_matches(&client, api_key).await {
            Ok(recent) => stats.recent_matches = recent,
            Err(e) => {
                log_lookup_failure("recent matches", &e);
                failed += 1;
            }
        }

        if failed == LOOKUP_COUNT {
            return Err(AppError::LiveDataUnavailable { failed });
        }

        info!(
            "Live data assembled ({} of {} lookups succeeded)",
            LOOKUP_COUNT - failed,
            LOOKUP_COUNT
        );
        Ok(stats)
    }

    #[instrument(skip(self, client, api_key))]
    async fn fetch_standings(
        &self,
        client: &Client,
        api_key: &str,
        season: i32,
    ) -> Result<StandingsSummary, AppError> {
        let url = build_standings_url(&self.base_url, team::LEAGUE_ID, season);
        let entries = fetch_entries::<StandingsEntry>(client, &url, api_key).await?;
        let table = select_table(&entries)
            .filter(|table| !table.is_empty())
            .ok_or_else(|| AppError::no_data("No standings table in response", &url))?;

        Ok(normalize_standings(table, team::ID, limits::STANDINGS_ROWS))
    }

    #[instrument(skip(self, client, api_key))]
    async fn fetch_next_match(&self, client: &Client, api_key: &str) -> Result<NextMatch, AppError> {
        let url = build_next_fixtures_url(&self.base_url, team::ID, limits::NEXT_MATCHES);
        let fixtures = fetch_entries::<FixtureEntry>(client, &url, api_key).await?;

        fixtures
            .first()
            .map(normalize_next_match)
            .ok_or_else(|| AppError::no_data("No upcoming fixture", &url))
    }

    #[instrument(skip(self, client, api_key))]
    async fn fetch_recent_matches(
        &self,
        client: &Client,
        api_key: &str,
    ) -> Result<Vec<RecentMatchResult>, AppError> {
        let url = build_last_fixtures_url(&self.base_url, team::ID, limits::RECENT_MATCHES);
        let fixtures = fetch_entries::<FixtureEntry>(client, &url, api_key).await?;

        Ok(normalize_recent_matches(
            &fixtures,
            team::ID,
            limits::RECENT_MATCHES,
        ))
    }
}

/// Fetches an API envelope and returns its entries.
///
/// API-Football signals bad keys and exhausted quotas with HTTP 200, an
/// `errors` object and an empty `response`, so an empty list is an error.
async fn fetch_entries<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    api_key: &str,
) -> Result<Vec<T>, AppError> {
    let envelope: ApiEnvelope<T> = fetch(client, url, api_key).await?;

    if envelope.has_errors() {
        warn!("API reported errors for {url}: {}", envelope.errors);
    }

    if envelope.response.is_empty() {
        return Err(AppError::no_data("Response contains no entries", url));
    }

    Ok(envelope.response)
}

fn log_lookup_failure(lookup: &str, e: &AppError) {
    if e.is_missing_data() {
        warn!("No data for {lookup}: {e}");
    } else if e.is_rate_limited() {
        warn!("Request quota exhausted fetching {lookup}: {e}");
    } else if e.is_transport() {
        error!("Network error fetching {lookup}: {e}");
    } else {
        error!("Error fetching {lookup}: {e}");
    }
}
