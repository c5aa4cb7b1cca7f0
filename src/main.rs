// src/main.rs
use clap::Parser;
use fcz_stats::cli::{Args, is_config_operation};
use fcz_stats::error::AppError;
use fcz_stats::logging::setup_logging;
use fcz_stats::{Config, StatsFetcher, render_page};
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Invalid settings are reset one by one so a valid credential survives
    let (config, config_problems) = Config::load_or_recover().await;

    // The page is written even when no log file can be opened
    let _logging = match setup_logging(&args, config.log_file_path.as_ref()).await {
        Ok(session) => {
            if let Some(path) = &session.log_file_path {
                info!("Logs are being written to: {path}");
            }
            Some(session)
        }
        Err(e) => {
            eprintln!("Warning: logging disabled: {e}");
            None
        }
    };

    for problem in &config_problems {
        warn!("Ignoring invalid setting, using default: {problem}");
    }

    if is_config_operation(&args) {
        return handle_config_operation(&args).await;
    }

    let fetcher = StatsFetcher::new(&config);
    if !fetcher.has_api_key() {
        eprintln!(
            "No API key configured, showing sample data. Set FOOTBALL_API_KEY or run with --config <API_KEY>."
        );
    }
    let stats = fetcher.fetch().await;
    info!(
        "Rendering {} statistics for season {} ({:?} data)",
        stats.team_name, stats.season, stats.source
    );

    let content = if args.json {
        serde_json::to_string_pretty(&stats)?
    } else {
        render_page(&stats)
    };

    match &args.output {
        Some(path) => {
            write_output(path, &content).await?;
            info!("Page written to {path}");
            eprintln!("Written to {path}");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(content.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}

/// Lists or updates the stored configuration.
///
/// Updates only touch the config file; values coming from the environment
/// are never written back.
async fn handle_config_operation(args: &Args) -> Result<(), AppError> {
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if let Some(new_key) = &args.new_api_key {
        if new_key.trim().is_empty() {
            return Err(AppError::config_error("API key must not be empty"));
        }
        let config_path = Config::save_api_key(Some(new_key)).await?;
        println!("API key saved to {config_path}");
    } else if args.clear_api_key {
        Config::save_api_key(None).await?;
        println!("API key cleared. Sample data will be shown unless FOOTBALL_API_KEY is set.");
    }

    Ok(())
}

async fn write_output(path: &str, content: &str) -> Result<(), AppError> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
