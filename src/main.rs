use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ExportConfig, ScraperConfig};
use crate::scraper::{DaftClient, PaginationDriver};
use crate::spreadsheets::{export_table, ListingTable};
use crate::timing::RunTimer;

mod config;
mod domain;
mod errors;
mod scraper;
mod spreadsheets;
mod timing;


/// Where to write the collected listings; `.xlsx` or `.tsv` pick those
/// formats, anything else is written as CSV. `None` prints the table only.
const EXPORT_PATH: Option<&str> = None;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ScraperConfig {
        export: EXPORT_PATH.map(ExportConfig::from_path),
        ..ScraperConfig::default()
    };
    let timer = RunTimer::start();

    // The client (and its connection pool) lives only as long as the driver.
    let results = {
        let client = DaftClient::new(&config).context("Failed to build listings client")?;
        let page_size = client.page_size();
        let mut driver = PaginationDriver::new(client, page_size);
        let results = driver.run().await;
        tracing::debug!(
            pages = driver.pages_fetched(),
            state = ?driver.state(),
            "Driver stopped"
        );
        results
    };

    let table = ListingTable::new(results);
    if table.is_empty() {
        tracing::warn!("No listings were collected");
    } else {
        tracing::info!(rows = table.len(), "Successfully created table with scraped data");
    }
    println!("{table}");

    if let Some(export) = &config.export {
        match export_table(&table, export) {
            Ok(()) => tracing::info!(path = %export.path.display(), "Exported listings"),
            Err(e) => tracing::error!(path = %export.path.display(), error = %e, "Export failed"),
        }
    }

    timer.report();
    Ok(())
}
