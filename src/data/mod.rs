use std::fs::File;
use std::path::Path;

use csv::StringRecord;
use thiserror::Error;

use crate::sales::LedgerError;

pub mod loaders;
pub mod records;
pub mod reports;
pub mod sales_files;


/// Problems with a single line. The line is skipped and reading goes on.
#[derive(Debug, PartialEq, Error)]
pub enum RecordError {
    #[error("expected at least {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },
    #[error("invalid {field} '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("negative unit price {0}")]
    NegativePrice(rust_decimal::Decimal),
    #[error("{0}")]
    Ledger(#[from] LedgerError),
}

/// Problems that make a whole sales file unusable.
#[derive(Debug, Error)]
pub enum SalesFileError {
    #[error("failed to read file, err={0}")]
    Read(#[from] csv::Error),
    #[error("file is empty")]
    Empty,
    #[error("invalid header, err={0}")]
    InvalidHeader(RecordError),
    #[error("salesperson with document {document_type} {document_number} not found")]
    UnknownSalesperson { document_type: String, document_number: u64 },
}

/// Every input file is `;` separated text without a header row. Quote characters
/// are part of the data.
pub(crate) fn open_reader(path: &Path) -> Result<csv::Reader<File>, csv::Error> {
    csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_path(path)
}

pub(crate) fn line_number(record: &StringRecord) -> u64 {
    record.position().map_or(0, |pos| pos.line())
}

pub(crate) fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

pub(crate) fn is_io_error(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Io(_))
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
