//! Page sections
//!
//! Each function renders one block of the page from the canonical record.
//! All text coming from the record is escaped here.

use super::escape::escape_html;
use crate::constants::team;
use crate::stats_fetcher::models::{
    DataSource, MatchOutcome, NextMatch, SeasonDetails, SplitRecord, StandingsRow,
    TeamStatistics,
};
use crate::stats_fetcher::processors::format_date;

fn outcome_badge(outcome: MatchOutcome) -> String {
    format!(
        r#"<span class="badge badge-{}" title="{}">{}</span>"#,
        outcome.label(),
        outcome.label(),
        outcome.letter()
    )
}

/// Formats a goal difference with an explicit sign for positive values.
pub fn signed(value: i32) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

/// Whether a table row belongs to the tracked team.
///
/// Provider rows carry an id and are matched on it; hand-authored rows
/// have none and fall back to the team name.
pub fn is_tracked_row(row: &StandingsRow, stats: &TeamStatistics) -> bool {
    match row.team_id {
        Some(id) => id == team::ID,
        None => row.team_name == stats.team_name,
    }
}

pub fn render_header(stats: &TeamStatistics) -> String {
    let notice = match stats.source {
        DataSource::Live => String::new(),
        DataSource::Sample => r#"<p class="notice">Live data is unavailable. Showing sample data.</p>"#
            .to_string(),
    };
    format!(
        "<header>\n<h1>{}</h1>\n<p class=\"subtitle\">{} &middot; Season {}</p>\n{}\n</header>\n",
        escape_html(&stats.team_name),
        escape_html(&stats.league),
        escape_html(&stats.season),
        notice
    )
}

pub fn render_summary(stats: &TeamStatistics) -> String {
    let position = if stats.position == 0 {
        "-".to_string()
    } else {
        format!("{}.", stats.position)
    };

    let cards = [
        ("Position", position),
        ("Points", stats.points.to_string()),
        ("Played", stats.played.to_string()),
        (
            "W / D / L",
            format!("{} / {} / {}", stats.won, stats.drawn, stats.lost),
        ),
        (
            "Goals",
            format!("{}:{}", stats.goals_for, stats.goals_against),
        ),
        ("Goal difference", signed(stats.goal_difference)),
    ];

    let mut html = String::from("<section class=\"summary\">\n");
    for (label, value) in cards {
        html.push_str(&format!(
            "<div class=\"card\"><span class=\"label\">{label}</span><span class=\"value\">{}</span></div>\n",
            escape_html(&value)
        ));
    }
    html.push_str("</section>\n");
    html
}

pub fn render_next_match(next_match: Option<&NextMatch>) -> String {
    let Some(next) = next_match else {
        return "<section class=\"next-match\">\n<h2>Next match</h2>\n<p>No upcoming match scheduled.</p>\n</section>\n"
            .to_string();
    };

    format!(
        "<section class=\"next-match\">\n<h2>Next match</h2>\n\
         <p class=\"fixture\">{} &ndash; {}</p>\n\
         <p class=\"details\">{} &middot; {} &middot; {}</p>\n</section>\n",
        escape_html(&next.home_team),
        escape_html(&next.away_team),
        escape_html(&format_date(&next.kickoff)),
        escape_html(&next.competition),
        escape_html(&next.venue)
    )
}

fn render_crest(row: &StandingsRow) -> String {
    if row.crest.is_empty() {
        String::new()
    } else {
        format!(
            r#"<img class="crest" src="{}" alt="" width="20" height="20"> "#,
            escape_html(&row.crest)
        )
    }
}

pub fn render_standings(stats: &TeamStatistics) -> String {
    let mut html = String::from(
        "<section class=\"standings\">\n<h2>Table</h2>\n<table>\n<thead><tr>\
         <th>#</th><th>Team</th><th>P</th><th>W</th><th>D</th><th>L</th>\
         <th>Goals</th><th>+/-</th><th>Pts</th></tr></thead>\n<tbody>\n",
    );

    if stats.standings.is_empty() {
        html.push_str("<tr><td colspan=\"9\">Table not available.</td></tr>\n");
    }

    for row in &stats.standings {
        let class = if is_tracked_row(row, stats) {
            " class=\"highlight\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<tr{class}><td>{}</td><td>{}{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td>{}:{}</td><td>{}</td><td>{}</td></tr>\n",
            row.position,
            render_crest(row),
            escape_html(&row.team_name),
            row.played,
            row.won,
            row.draw,
            row.lost,
            row.goals_for,
            row.goals_against,
            signed(row.goal_difference),
            row.points
        ));
    }

    html.push_str("</tbody>\n</table>\n</section>\n");
    html
}

pub fn render_recent_matches(stats: &TeamStatistics) -> String {
    let matches = &stats.recent_matches;
    let mut html = String::from("<section class=\"recent\">\n<h2>Recent results</h2>\n");

    if matches.is_empty() {
        html.push_str("<p>No recent results.</p>\n</section>\n");
        return html;
    }

    let form: String = stats.form().into_iter().map(outcome_badge).collect();
    html.push_str(&format!("<p class=\"form\">{form}</p>\n<ul>\n"));
    for result in matches.iter() {
        html.push_str(&format!(
            "<li>{} <span class=\"date\">{}</span> {} <span class=\"score\">{}</span></li>\n",
            outcome_badge(result.outcome),
            escape_html(&result.date),
            escape_html(&result.opponent),
            escape_html(&result.score)
        ));
    }
    html.push_str("</ul>\n</section>\n");
    html
}

fn split_row(label: &str, record: &SplitRecord) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}:{}</td><td>{}</td></tr>\n",
        escape_html(label),
        record.played,
        record.won,
        record.drawn,
        record.lost,
        record.goals_for,
        record.goals_against,
        record.points
    )
}

fn join_numbers(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_season_details(details: &SeasonDetails) -> String {
    let header = "<tr><th></th><th>P</th><th>W</th><th>D</th><th>L</th><th>Goals</th><th>Pts</th></tr>\n";

    let mut html = String::from("<section class=\"details\">\n<h2>Season details</h2>\n");

    html.push_str(&format!(
        "<div class=\"facts\">\
         <div class=\"card\"><span class=\"label\">Clean sheets</span><span class=\"value\">{}</span></div>\
         <div class=\"card\"><span class=\"label\">Goals per match</span><span class=\"value\">{:.2}</span></div>\
         <div class=\"card\"><span class=\"label\">Conceded per match</span><span class=\"value\">{:.2}</span></div>\
         <div class=\"card\"><span class=\"label\">Win rate</span><span class=\"value\">{}%</span></div>\
         </div>\n",
        details.clean_sheets,
        details.avg_goals_per_match,
        details.avg_conceded_per_match,
        details.win_percentage
    ));

    let form: String = details.form_last_5.iter().map(|o| outcome_badge(*o)).collect();
    html.push_str(&format!("<p class=\"form\">Form: {form}</p>\n"));

    html.push_str("<h3>Home and away</h3>\n<table>\n");
    html.push_str(header);
    html.push_str(&split_row("Home", &details.home));
    html.push_str(&split_row("Away", &details.away));
    html.push_str("</table>\n");

    if !details.monthly.is_empty() {
        html.push_str("<h3>By month</h3>\n<table>\n");
        html.push_str(header);
        for month in &details.monthly {
            html.push_str(&split_row(&month.month, &month.record));
        }
        html.push_str("</table>\n");
    }

    if !details.top_scorers.is_empty() {
        html.push_str("<h3>Top scorers</h3>\n<table>\n<tr><th>Player</th><th>Goals</th><th>Assists</th></tr>\n");
        for scorer in &details.top_scorers {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&scorer.name),
                scorer.goals,
                scorer.assists
            ));
        }
        html.push_str("</table>\n");
    }

    html.push_str(&format!(
        "<h3>Progression</h3>\n<p>Points: {}</p>\n<p>Scored: {}</p>\n<p>Conceded: {}</p>\n",
        join_numbers(&details.points_progression),
        join_numbers(&details.goals_by_matchday.scored),
        join_numbers(&details.goals_by_matchday.conceded)
    ));

    html.push_str("</section>\n");
    html
}
