use std::fs;
use std::path::Path;

use csv::StringRecord;
use log::{debug, info, warn};

use super::records::{LineItem, SalesHeader};
use super::{display_name, is_blank, is_io_error, line_number, open_reader, RecordError, SalesFileError};
use crate::config::Config;
use crate::sales::ledger::SalesLedger;

#[derive(Debug, Default, PartialEq)]
pub struct FileStats {
    pub lines_applied: usize,
    pub lines_skipped: usize,
}

#[derive(Debug, Default, PartialEq)]
pub struct ProcessingStats {
    pub files_found: usize,
    pub files_processed: usize,
    pub files_skipped: usize,
    pub lines_applied: usize,
    pub lines_skipped: usize,
}

/// Names of the sales files in `dir`, sorted. An unreadable directory yields no files.
pub fn find_sales_files(dir: &Path, config: &Config) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("could not read directory {}, err={}", dir.display(), err);
            return Vec::new();
        },
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|kind| kind.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| config.is_sales_file(name))
        .collect();
    names.sort();

    names
}

/// Applies every line item of one sales file to the ledger.
///
/// A bad header or an unknown salesperson rejects the file before anything is
/// applied. Bad line items are skipped one by one.
pub fn process_sales_file(path: &Path, ledger: &mut SalesLedger) -> Result<FileStats, SalesFileError> {
    let file_name = display_name(path);
    let mut reader = open_reader(path)?;
    let mut records = reader.records();

    let header = loop {
        match records.next() {
            None => return Err(SalesFileError::Empty),
            Some(record) => {
                let record = record?;
                if !is_blank(&record) {
                    break SalesHeader::try_from(&record).map_err(SalesFileError::InvalidHeader)?;
                }
            },
        }
    };

    if !ledger.has_salesperson(header.document_number) {
        return Err(SalesFileError::UnknownSalesperson {
            document_type: header.document_type,
            document_number: header.document_number,
        });
    }

    let mut stats = FileStats::default();
    for record in records {
        let record = match record {
            Ok(record) => record,
            Err(err) if is_io_error(&err) => return Err(err.into()),
            Err(err) => {
                warn!("skipping unreadable record in {}, err={}", file_name, err);
                stats.lines_skipped += 1;
                continue;
            },
        };

        if is_blank(&record) {
            continue;
        }

        match apply_line_item(&record, header.document_number, ledger) {
            Ok(item) => {
                debug!(
                    "applied sale, file={}, product={}, quantity={}",
                    file_name, item.product_id, item.quantity
                );
                stats.lines_applied += 1;
            },
            Err(err) => {
                warn!("skipping line {} in {}, err={}", line_number(&record), file_name, err);
                stats.lines_skipped += 1;
            },
        }
    }

    Ok(stats)
}

fn apply_line_item(record: &StringRecord, document_number: u64, ledger: &mut SalesLedger) -> Result<LineItem, RecordError> {
    let item = LineItem::try_from(record)?;
    ledger.record_sale(document_number, item.product_id, item.quantity)?;

    Ok(item)
}

/// Finds and processes every sales file under the configured root. Problems
/// with individual files are logged and never stop the run.
pub fn process_sales_files(config: &Config, ledger: &mut SalesLedger) -> ProcessingStats {
    let names = find_sales_files(&config.root, config);
    let mut stats = ProcessingStats {
        files_found: names.len(),
        ..ProcessingStats::default()
    };

    for name in names {
        match process_sales_file(&config.resolve(&name), ledger) {
            Ok(file_stats) => {
                info!(
                    "processed {}, applied={}, skipped={}",
                    name, file_stats.lines_applied, file_stats.lines_skipped
                );
                stats.files_processed += 1;
                stats.lines_applied += file_stats.lines_applied;
                stats.lines_skipped += file_stats.lines_skipped;
            },
            Err(err) => {
                warn!("skipping file {}, err={}", name, err);
                stats.files_skipped += 1;
            },
        }
    }

    stats
}
