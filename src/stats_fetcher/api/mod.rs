pub mod fetch_utils;
pub mod http_client;
pub mod urls;

pub use fetch_utils::{fetch, parse_body};
pub use http_client::create_http_client_with_timeout;
pub use urls::{build_last_fixtures_url, build_next_fixtures_url, build_standings_url};
