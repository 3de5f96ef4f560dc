//! Quoteboard - relative performance leaderboard for a fixed symbol basket.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use quoteboard_config::Config;
use quoteboard_core::TradingCalendar;
use quoteboard_pipeline::{Pipeline, RunReport};
use yfin_api::YfinClient;

/// Baseline to use: the command-line override when given, else the
/// configured default.
fn resolve_baseline(arg: Option<String>, default: NaiveDate) -> Result<NaiveDate> {
    match arg {
        Some(arg) => arg
            .parse::<NaiveDate>()
            .context("baseline date must be YYYY-MM-DD"),
        None => Ok(default),
    }
}

fn print_report(report: &RunReport) {
    println!("Baseline trading day: {}", report.baseline);

    if let Some(top) = report.leader() {
        println!("Leader: {} ({:+.2}%)", top.symbol, top.percentage);
    }

    println!();
    println!("{:<6} {:<8} {:>10}", "Rank", "Symbol", "Change");
    for entry in &report.ranking {
        println!(
            "{:<6} {:<8} {:>9.2}%",
            entry.rank, entry.symbol, entry.percentage
        );
    }

    println!();
    println!(
        "{:<8} {:>12} {:>12} {:>10}",
        "Symbol", "Start", "End", "Change"
    );
    for summary in &report.summaries {
        println!(
            "{:<8} {:>12.2} {:>12.2} {:>9.2}%",
            summary.symbol, summary.start_close, summary.end_close, summary.percentage_change
        );
    }

    for failure in &report.failures {
        println!("! {} excluded: {}", failure.symbol, failure.reason);
    }
}

async fn run() -> Result<()> {
    env_logger::init();

    let config = Config::load_default();
    log::info!(
        "basket: {}, quote source: {}",
        config.general.basket.join(", "),
        config.api.base_url
    );

    let baseline = resolve_baseline(std::env::args().nth(1), config.general.baseline_date)?;
    log::info!("requested baseline: {baseline}");

    let api_config = yfin_api::Config::new()
        .with_base_url(&config.api.base_url)
        .with_timeout(Duration::from_secs(config.api.timeout_secs));
    let client = YfinClient::new(api_config).context("creating quote-history client")?;

    let calendar = TradingCalendar::new(config.calendar.holiday_set());
    let pipeline = Pipeline::new(client, calendar, config.general.basket.clone());

    let token = pipeline.begin_run();
    if let Some(report) = pipeline.run_guarded(baseline, &token).await? {
        print_report(&report);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_baseline() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()
    }

    #[test]
    fn test_resolve_baseline_prefers_argument() {
        let baseline = resolve_baseline(Some("2025-02-03".to_string()), default_baseline()).unwrap();
        assert_eq!(baseline, NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
    }

    #[test]
    fn test_resolve_baseline_falls_back_to_config() {
        let baseline = resolve_baseline(None, default_baseline()).unwrap();
        assert_eq!(baseline, default_baseline());
    }

    #[test]
    fn test_resolve_baseline_rejects_garbage() {
        assert!(resolve_baseline(Some("yesterday".to_string()), default_baseline()).is_err());
    }
}
