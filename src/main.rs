mod config;
mod error;
mod fetcher;
mod formatter;
mod listing;
mod logging;
mod persist;
mod report;
mod utils;

use clap::Parser;

use crate::config::Settings;

#[derive(Debug, Parser)]
#[command(
    name = "crypto-report",
    version,
    about = "Fetch the top cryptocurrency listing and write a JSON dump plus a text report"
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _cli = Cli::parse();
    let settings = Settings::default();

    if let Err(e) = logging::init(&settings.log_path) {
        println!("logging.init_failed {e:#}");
    }
    if let Err(e) = settings.validate() {
        log::error!("config.invalid {e:#}");
        return;
    }

    // Failures are logged, never surfaced through the exit code.
    let outcome = report::run(&settings).await;
    report::log_outcome(log::logger(), &outcome);
}
