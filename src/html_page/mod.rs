//! Static HTML rendering of the statistics record
//!
//! The page is self-contained: styles are inlined and crests are the only
//! external resources. Rendering never fails; absent parts of the record get
//! a short placeholder text instead of their section.

pub mod escape;
pub mod sections;

pub use escape::escape_html;

use crate::stats_fetcher::models::TeamStatistics;
use sections::{
    render_header, render_next_match, render_recent_matches, render_season_details,
    render_standings, render_summary,
};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 960px; padding: 1rem; color: #1a1a1a; background: #f5f7fa; }
header { background: #0b3d91; color: #fff; padding: 1rem 1.5rem; border-radius: 8px; }
header h1 { margin: 0; }
.subtitle { margin: .25rem 0 0; opacity: .85; }
.notice { background: #fff4d6; color: #6b4e00; padding: .5rem .75rem; border-radius: 4px; }
section { background: #fff; margin-top: 1rem; padding: 1rem 1.5rem; border-radius: 8px; }
.summary, .facts { display: flex; flex-wrap: wrap; gap: .75rem; }
.card { display: flex; flex-direction: column; min-width: 120px; padding: .5rem .75rem; border: 1px solid #e0e4ea; border-radius: 6px; }
.label { font-size: .8rem; color: #5a6270; }
.value { font-size: 1.4rem; font-weight: 600; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: .35rem .5rem; text-align: left; border-bottom: 1px solid #eef0f3; }
tr.highlight { background: #dce8ff; font-weight: 600; }
.crest { vertical-align: middle; }
.recent ul { list-style: none; padding: 0; }
.badge { display: inline-block; width: 1.4rem; text-align: center; border-radius: 4px; color: #fff; font-weight: 700; margin-right: .25rem; }
.badge-win { background: #2e9d4a; }
.badge-draw { background: #8a8f98; }
.badge-loss { background: #c73a3a; }
"#;

/// Renders the full statistics page as an HTML document.
///
/// The tracked team's row is highlighted in the table, the kickoff of the
/// next match is shown in display format and every text value from the record
/// is escaped.
///
/// # Example
///
/// ```
/// use fcz_stats::html_page::render_page;
/// use fcz_stats::stats_fetcher::sample_statistics;
///
/// let html = render_page(&sample_statistics());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("FC Zürich"));
/// ```
pub fn render_page(stats: &TeamStatistics) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!(
        "<title>{} &middot; {}</title>\n",
        escape_html(&stats.team_name),
        escape_html(&stats.season)
    ));
    html.push_str(&format!("<style>{STYLES}</style>\n</head>\n<body>\n"));

    html.push_str(&render_header(stats));
    html.push_str("<main>\n");
    html.push_str(&render_summary(stats));
    html.push_str(&render_next_match(stats.next_match.as_ref()));
    html.push_str(&render_standings(stats));
    html.push_str(&render_recent_matches(stats));
    if let Some(details) = &stats.season_details {
        html.push_str(&render_season_details(details));
    }
    html.push_str("</main>\n");

    html.push_str(&format!(
        "<footer><p>Data: API-Football &middot; {} {}</p></footer>\n",
        crate::NAME,
        crate::VERSION
    ));
    html.push_str("</body>\n</html>\n");
    html
}
