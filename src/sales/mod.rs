use thiserror::Error;

pub mod ledger;
pub mod product;
pub mod salesperson;


#[derive(Debug, PartialEq, Error)]
pub enum LedgerError {
    #[error("product {0} not found")]
    ProductNotFound(u32),
    #[error("salesperson with document {0} not found")]
    SalespersonNotFound(u64),
    #[error("sale of product {0} overflows the collected totals")]
    AmountOverflow(u32),
}
