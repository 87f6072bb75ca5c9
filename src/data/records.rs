use std::str::FromStr;

use csv::StringRecord;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use super::RecordError;
use crate::sales::product::Product;
use crate::sales::salesperson::Salesperson;

const MONEY_DECIMALS: u32 = 2;

/// First line of a sales file: `documentType;documentNumber`.
#[derive(Debug, PartialEq)]
pub struct SalesHeader {
    pub document_type: String,
    pub document_number: u64,
}

/// `productId;quantity;` with anything after the quantity ignored.
#[derive(Debug, PartialEq)]
pub struct LineItem {
    pub product_id: u32,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
pub struct SalespersonRow<'a> {
    pub first_names: &'a str,
    pub last_names: &'a str,
    pub revenue_collected: String,
}

#[derive(Debug, Serialize)]
pub struct ProductRow<'a> {
    pub name: &'a str,
    pub unit_price: String,
    pub units_sold: u64,
}

fn require_fields(record: &StringRecord, expected: usize) -> Result<(), RecordError> {
    if record.len() < expected {
        return Err(RecordError::MissingFields {
            expected,
            found: record.len(),
        });
    }

    Ok(())
}

fn parse_field<T: FromStr>(record: &StringRecord, index: usize, field: &'static str) -> Result<T, RecordError> {
    let value = record.get(index).unwrap_or_default();
    value.parse::<T>().map_err(|_| RecordError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn text_field(record: &StringRecord, index: usize) -> String {
    record.get(index).unwrap_or_default().to_string()
}

/// Rounds half away from zero and always renders two fractional digits, so
/// `30000` becomes `30000.00`. Padding happens in the text since values near
/// `Decimal::MAX` cannot be rescaled.
pub fn to_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(MONEY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.prec$}", rounded, prec = MONEY_DECIMALS as usize)
}

impl TryFrom<&StringRecord> for Product {
    type Error = RecordError;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        require_fields(record, 3)?;
        let id = parse_field(record, 0, "product id")?;
        let unit_price: Decimal = parse_field(record, 2, "unit price")?;
        if unit_price < dec!(0) {
            return Err(RecordError::NegativePrice(unit_price));
        }

        Ok(Product::new(id, text_field(record, 1), unit_price))
    }
}

impl TryFrom<&StringRecord> for Salesperson {
    type Error = RecordError;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        require_fields(record, 4)?;
        let document_number = parse_field(record, 1, "document number")?;

        Ok(Salesperson::new(
            text_field(record, 0),
            document_number,
            text_field(record, 2),
            text_field(record, 3),
        ))
    }
}

impl TryFrom<&StringRecord> for SalesHeader {
    type Error = RecordError;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        require_fields(record, 2)?;

        Ok(SalesHeader {
            document_type: text_field(record, 0),
            document_number: parse_field(record, 1, "document number")?,
        })
    }
}

impl TryFrom<&StringRecord> for LineItem {
    type Error = RecordError;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        require_fields(record, 2)?;

        Ok(LineItem {
            product_id: parse_field(record, 0, "product id")?,
            quantity: parse_field(record, 1, "quantity")?,
        })
    }
}

impl<'a> From<&'a Salesperson> for SalespersonRow<'a> {
    fn from(salesperson: &'a Salesperson) -> Self {
        SalespersonRow {
            first_names: salesperson.first_names(),
            last_names: salesperson.last_names(),
            revenue_collected: to_money(salesperson.revenue_collected()),
        }
    }
}

impl<'a> From<&'a Product> for ProductRow<'a> {
    fn from(product: &'a Product) -> Self {
        ProductRow {
            name: product.name(),
            unit_price: to_money(product.unit_price()),
            units_sold: product.units_sold(),
        }
    }
}
