use anyhow::Result;
use log::{info, warn};

use crate::config::Config;
use crate::data::loaders::{load_catalog, load_directory};
use crate::data::records::to_money;
use crate::data::reports::export_reports;
use crate::data::sales_files::{process_sales_files, ProcessingStats};
use crate::sales::ledger::{SalesLedger, Summary};

pub struct RunReport {
    pub processing: ProcessingStats,
    pub summary: Summary,
}

/// Loads both reference files, applies every sales file, then writes the two
/// reports. Each phase finishes before the next one starts.
pub fn run(config: &Config) -> Result<RunReport> {
    let mut ledger = SalesLedger::new();

    let products = load_catalog(&config.catalog_path(), &mut ledger)?;
    info!("loaded products, count={}", products);

    let salespeople = load_directory(&config.directory_path(), &mut ledger)?;
    info!("loaded salespeople, count={}", salespeople);

    let processing = process_sales_files(config, &mut ledger);
    info!(
        "processed sales files, found={}, processed={}, skipped={}",
        processing.files_found, processing.files_processed, processing.files_skipped
    );

    export_reports(config, &ledger)?;

    let summary = ledger.summary();
    log_summary(&summary);

    Ok(RunReport { processing, summary })
}

fn log_summary(summary: &Summary) {
    match summary.total_revenue {
        Some(total) => info!("total revenue collected: {}", to_money(total)),
        None => warn!("total revenue collected does not fit a decimal"),
    }
    info!(
        "salespeople={}, products={}, total_units_sold={:?}",
        summary.salespeople, summary.products, summary.total_units_sold
    );
    if let Some((name, revenue)) = &summary.best_salesperson {
        info!("best salesperson: {} ({})", name, to_money(*revenue));
    }
    if let Some((name, units)) = &summary.best_selling_product {
        info!("best selling product: {} ({} units)", name, units);
    }
}
