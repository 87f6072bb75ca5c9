use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use enum_dispatch::enum_dispatch;
use log::{debug, info};

use super::records::{to_money, ProductRow, SalespersonRow};
use crate::config::Config;
use crate::sales::ledger::SalesLedger;

#[enum_dispatch]
pub trait ReportWriter {
    fn path(&self, config: &Config) -> PathBuf;

    /// Writes one row per entity, best first, and returns the row count.
    fn write_rows(&self, ledger: &SalesLedger, writer: &mut csv::Writer<File>) -> Result<usize, csv::Error>;
}

#[enum_dispatch(ReportWriter)]
pub enum Report {
    SalespersonReport,
    ProductReport,
}

/// `firstNames;lastNames;revenueCollected`, by revenue collected.
pub struct SalespersonReport;

/// `name;unitPrice;unitsSold`, by units sold.
pub struct ProductReport;

impl ReportWriter for SalespersonReport {
    fn path(&self, config: &Config) -> PathBuf {
        config.salesperson_report_path()
    }

    fn write_rows(&self, ledger: &SalesLedger, writer: &mut csv::Writer<File>) -> Result<usize, csv::Error> {
        let salespeople = ledger.salespeople_by_revenue();
        for salesperson in &salespeople {
            writer.serialize(SalespersonRow::from(*salesperson))?;
        }

        Ok(salespeople.len())
    }
}

impl ReportWriter for ProductReport {
    fn path(&self, config: &Config) -> PathBuf {
        config.product_report_path()
    }

    fn write_rows(&self, ledger: &SalesLedger, writer: &mut csv::Writer<File>) -> Result<usize, csv::Error> {
        let products = ledger.products_by_units_sold();
        for product in &products {
            debug!(
                "reporting product, id={}, units_sold={}, total_sales={:?}",
                product.id(),
                product.units_sold(),
                product.total_sales().map(to_money)
            );
            writer.serialize(ProductRow::from(*product))?;
        }

        Ok(products.len())
    }
}

fn create_writer(path: &Path) -> Result<csv::Writer<File>, csv::Error> {
    csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
}

/// Creates or truncates the report file and fills it.
pub fn export_report(report: &Report, config: &Config, ledger: &SalesLedger) -> Result<usize> {
    let path = report.path(config);
    let mut writer = create_writer(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let rows = report
        .write_rows(ledger, &mut writer)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!("wrote {}, rows={}", path.display(), rows);

    Ok(rows)
}

pub fn export_reports(config: &Config, ledger: &SalesLedger) -> Result<()> {
    for report in [Report::from(SalespersonReport), Report::from(ProductReport)] {
        export_report(&report, config, ledger)?;
    }

    Ok(())
}
