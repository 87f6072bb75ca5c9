use std::collections::hash_map::Values;
use std::collections::HashMap;

use rust_decimal::Decimal;

use super::product::Product;
use super::salesperson::Salesperson;
use super::LedgerError;

/// Holds the product catalog and the salesperson directory for one run.
#[derive(Default)]
pub struct SalesLedger {
    pub products: HashMap<u32, Product>,
    pub salespeople: HashMap<u64, Salesperson>,
}

#[derive(Debug, PartialEq)]
pub struct Summary {
    pub salespeople: usize,
    pub products: usize,
    /// `None` when the sum does not fit a `Decimal`.
    pub total_revenue: Option<Decimal>,
    pub total_units_sold: Option<u64>,
    pub best_salesperson: Option<(String, Decimal)>,
    pub best_selling_product: Option<(String, u64)>,
}

impl SalesLedger {
    pub fn new() -> SalesLedger {
        SalesLedger {
            products: HashMap::new(),
            salespeople: HashMap::new(),
        }
    }

    /// A product with an id already present replaces the previous one.
    pub fn add_product(&mut self, product: Product) {
        self.products.insert(product.id(), product);
    }

    /// A salesperson with a document number already present replaces the previous one.
    pub fn add_salesperson(&mut self, salesperson: Salesperson) {
        self.salespeople.insert(salesperson.document_number(), salesperson);
    }

    pub fn has_salesperson(&self, document_number: u64) -> bool {
        self.salespeople.contains_key(&document_number)
    }

    /// Applies one line item: the product gains `quantity` units sold and the
    /// salesperson collects their price. Nothing changes when either side is
    /// unknown or when a total would overflow.
    pub fn record_sale(&mut self, document_number: u64, product_id: u32, quantity: u32) -> Result<Decimal, LedgerError> {
        let salesperson = self
            .salespeople
            .get_mut(&document_number)
            .ok_or(LedgerError::SalespersonNotFound(document_number))?;
        let product = self
            .products
            .get_mut(&product_id)
            .ok_or(LedgerError::ProductNotFound(product_id))?;

        let amount = product
            .sale_amount(quantity)
            .ok_or(LedgerError::AmountOverflow(product_id))?;
        let units_sold = product
            .units_sold()
            .checked_add(u64::from(quantity))
            .ok_or(LedgerError::AmountOverflow(product_id))?;
        let revenue = salesperson
            .revenue_collected()
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow(product_id))?;

        product.set_units_sold(units_sold);
        salesperson.set_revenue_collected(revenue);

        Ok(amount)
    }

    pub fn products_iter(&self) -> Values<u32, Product> {
        self.products.values()
    }

    pub fn salespeople_iter(&self) -> Values<u64, Salesperson> {
        self.salespeople.values()
    }

    /// Highest revenue first, ties by ascending document number.
    pub fn salespeople_by_revenue(&self) -> Vec<&Salesperson> {
        let mut salespeople: Vec<&Salesperson> = self.salespeople_iter().collect();
        salespeople.sort_by(|a, b| {
            b.revenue_collected()
                .cmp(&a.revenue_collected())
                .then_with(|| a.document_number().cmp(&b.document_number()))
        });
        salespeople
    }

    /// Most units sold first, ties by ascending product id.
    pub fn products_by_units_sold(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products_iter().collect();
        products.sort_by(|a, b| b.units_sold().cmp(&a.units_sold()).then_with(|| a.id().cmp(&b.id())));
        products
    }

    pub fn summary(&self) -> Summary {
        let best_salesperson = self
            .salespeople_by_revenue()
            .first()
            .map(|s| (s.full_name(), s.revenue_collected()));
        let best_selling_product = self
            .products_by_units_sold()
            .first()
            .map(|p| (p.name().clone(), p.units_sold()));

        Summary {
            salespeople: self.salespeople.len(),
            products: self.products.len(),
            total_revenue: self
                .salespeople_iter()
                .try_fold(Decimal::ZERO, |total, s| total.checked_add(s.revenue_collected())),
            total_units_sold: self
                .products_iter()
                .try_fold(0u64, |total, p| total.checked_add(p.units_sold())),
            best_salesperson,
            best_selling_product,
        }
    }
}
