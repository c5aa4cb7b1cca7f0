use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

use crate::constants::{PLACEHOLDER, season::START_MONTH};

/// Display format of kickoff times, e.g. `07.12.2024 17:30`.
const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Display format of match dates in the results list, e.g. `2024-11-23`.
const MATCH_DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parses an ISO 8601 timestamp into the wall-clock time of its own offset.
///
/// A `Z` suffix is read as `+00:00`. Timestamps without an offset and bare
/// dates are accepted too; a bare date is taken as midnight.
pub fn parse_iso_datetime(input: &str) -> Option<NaiveDateTime> {
    let normalized = input.replace('Z', "+00:00");

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.naive_local());
    }

    if let Ok(dt) = DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt.naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(naive);
        }
    }

    NaiveDate::parse_from_str(&normalized, MATCH_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Formats an ISO 8601 timestamp as `DD.MM.YYYY HH:MM`.
///
/// Never fails: an empty input gives `"TBD"` and anything unparseable is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use fcz_stats::stats_fetcher::processors::format_date;
///
/// assert_eq!(format_date("2024-12-07T17:30:00Z"), "07.12.2024 17:30");
/// assert_eq!(format_date(""), "TBD");
/// assert_eq!(format_date("not-a-date"), "not-a-date");
/// ```
pub fn format_date(input: &str) -> String {
    if input.is_empty() {
        return PLACEHOLDER.to_string();
    }
    match parse_iso_datetime(input) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => input.to_string(),
    }
}

/// Formats the date of a finished match as `YYYY-MM-DD`, with the same
/// fallbacks as [`format_date`].
pub fn format_match_date(input: &str) -> String {
    if input.is_empty() {
        return PLACEHOLDER.to_string();
    }
    match parse_iso_datetime(input) {
        Some(dt) => dt.format(MATCH_DATE_FORMAT).to_string(),
        None => input.to_string(),
    }
}

/// Returns the starting year of the season running on `date`.
/// Seasons start in July, so spring dates belong to the previous year's season.
pub fn season_for_date(date: NaiveDate) -> i32 {
    if date.month() >= START_MONTH {
        date.year()
    } else {
        date.year() - 1
    }
}

/// Starting year of the current season, evaluated in local time.
pub fn current_season() -> i32 {
    season_for_date(Local::now().date_naive())
}

/// Season label such as `2024/25`.
pub fn season_label(season: i32) -> String {
    let next = (season + 1).rem_euclid(100);
    format!("{season}/{next:02}")
}
