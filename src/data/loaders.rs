use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;
use log::{debug, warn};

use super::{display_name, is_blank, is_io_error, line_number, open_reader, RecordError};
use crate::sales::ledger::SalesLedger;
use crate::sales::product::Product;
use crate::sales::salesperson::Salesperson;

/// Reads `productId;name;unitPrice` lines into the ledger's catalog and returns
/// how many were loaded. Only failing to read the file at all is an error.
pub fn load_catalog(path: &Path, ledger: &mut SalesLedger) -> Result<usize> {
    read_reference_file(path, |record| Product::try_from(record), |product: Product| {
        debug!("loaded product, id={}", product.id());
        ledger.add_product(product);
    })
}

/// Reads `documentType;documentNumber;firstNames;lastNames` lines into the
/// ledger's directory and returns how many were loaded.
pub fn load_directory(path: &Path, ledger: &mut SalesLedger) -> Result<usize> {
    read_reference_file(path, |record| Salesperson::try_from(record), |salesperson: Salesperson| {
        debug!("loaded salesperson, document={}", salesperson.document_number());
        ledger.add_salesperson(salesperson);
    })
}

fn read_reference_file<T>(
    path: &Path,
    parse: impl Fn(&StringRecord) -> Result<T, RecordError>,
    mut store: impl FnMut(T),
) -> Result<usize> {
    let file_name = display_name(path);
    let mut reader = open_reader(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut loaded = 0;

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) if is_io_error(&err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            },
            Err(err) => {
                warn!("skipping unreadable record in {}, err={}", file_name, err);
                continue;
            },
        };

        if is_blank(&record) {
            continue;
        }

        match parse(&record) {
            Ok(entry) => {
                store(entry);
                loaded += 1;
            },
            Err(err) => warn!("skipping line {} in {}, err={}", line_number(&record), file_name, err),
        }
    }

    Ok(loaded)
}
