//! FC Zürich Statistics Library
//!
//! This library fetches season statistics for FC Zürich from API-Football
//! and renders them as a static HTML page. When no API key is configured or
//! the API cannot be reached, a built-in sample season is used instead, so a
//! statistics record is always available.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fcz_stats::{Config, StatsFetcher, render_page};
//! use fcz_stats::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!
//!     // Never fails: falls back to sample data
//!     let stats = StatsFetcher::new(&config).fetch().await;
//!
//!     println!("{}", render_page(&stats));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod html_page;
pub mod logging;
pub mod stats_fetcher;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use html_page::render_page;
pub use stats_fetcher::{
    DataSource, NextMatch, RecentMatchResult, StandingsRow, StatsFetcher, TeamStatistics,
    format_date, sample_statistics,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
