use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation only touches configuration and never fetches statistics
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_key.is_some() || args.clear_api_key || args.list_config
}

/// FC Zürich statistics page
///
/// Fetches the current Swiss Super League table, the next fixture and the
/// latest results of FC Zürich from API-Football and renders them as an HTML
/// page. Without an API key, or when the API cannot be reached, a sample
/// season is shown instead.
///
/// The API key is read from the config file or the FOOTBALL_API_KEY
/// environment variable. The config file wins when both are set.
#[derive(Parser, Debug, Default)]
#[command(author = "Niko Salonen", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Write the page to this file instead of stdout.
    #[arg(short = 'o', long = "output", help_heading = "Output")]
    pub output: Option<String>,

    /// Print the statistics record as JSON instead of HTML.
    #[arg(long = "json", help_heading = "Output")]
    pub json: bool,

    /// Store an API-Football key in the config file.
    #[arg(long = "config", help_heading = "Configuration", value_name = "API_KEY")]
    pub new_api_key: Option<String>,

    /// Remove the stored API key from the config file.
    #[arg(long = "clear-api-key", help_heading = "Configuration")]
    pub clear_api_key: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_invocation_fetches() {
        let args = Args::parse_from(["fcz_stats"]);
        assert!(!is_config_operation(&args));
        assert!(args.output.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_output_and_json_flags() {
        let args = Args::parse_from(["fcz_stats", "-o", "page.html", "--json"]);
        assert_eq!(args.output.as_deref(), Some("page.html"));
        assert!(args.json);
    }

    #[test]
    fn test_config_operations() {
        let args = Args::parse_from(["fcz_stats", "--config", "abc123"]);
        assert_eq!(args.new_api_key.as_deref(), Some("abc123"));
        assert!(is_config_operation(&args));

        assert!(is_config_operation(&Args::parse_from(["fcz_stats", "--clear-api-key"])));
        assert!(is_config_operation(&Args::parse_from(["fcz_stats", "-l"])));
    }
}
