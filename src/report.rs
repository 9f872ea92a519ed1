use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use log::Log;

use crate::{config::Settings, error::ReportError, fetcher::ListingClient, formatter, listing, persist};

/// What a successful run left on disk.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub json_path: PathBuf,
    pub report_path: PathBuf,
    pub coins: usize,
    pub content: String,
}

pub async fn run(settings: &Settings) -> Result<ReportOutcome, ReportError> {
    run_on(settings, Local::now().date_naive()).await
}

/// Fetch, save the raw listing, render and save the table, in that order.
/// The JSON file stays on disk if a later stage fails.
pub async fn run_on(settings: &Settings, date: NaiveDate) -> Result<ReportOutcome, ReportError> {
    let client = ListingClient::new(settings)?;

    log::info!("Fetching data...");
    log::info!("report.fetch url={}", client.endpoint());
    let payload = client.fetch().await?;

    persist::write_json(&settings.json_path, &payload)?;
    log::info!("report.saved_json path={}", settings.json_path.display());

    let coins = listing::coin_list(&payload).len();
    let lines = formatter::render_report(&payload, date);
    let content = persist::write_report(&settings.report_path, &lines)?;
    log::info!(
        "report.saved_report path={} coins={}",
        settings.report_path.display(),
        coins
    );

    Ok(ReportOutcome {
        json_path: settings.json_path.clone(),
        report_path: settings.report_path.clone(),
        coins,
        content,
    })
}

/// Reports a finished run: preview on stdout for success, an ERROR record
/// with the cause chain for failure.
pub fn log_outcome(logger: &dyn Log, outcome: &Result<ReportOutcome, ReportError>) {
    match outcome {
        Ok(outcome) => {
            log::info!(
                logger: logger,
                "report.done coins={} report={}",
                outcome.coins,
                outcome.report_path.display()
            );
            println!("\nSuccess! Preview of report:");
            println!("{}", outcome.content);
            println!("\nFull data also saved to {}", outcome.json_path.display());
        }
        Err(e) => {
            log::error!(logger: logger, "Critical Error: {}: {}", e.stage(), e.chain());
        }
    }
}
