use getset::{CopyGetters, Getters, Setters};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, Setters)]
pub struct Product {
    #[getset(get_copy = "pub")]
    id: u32,
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    unit_price: Decimal,
    #[getset(get_copy = "pub", set = "pub(crate)")]
    units_sold: u64,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, unit_price: Decimal) -> Product {
        Product {
            id,
            name: name.into(),
            unit_price,
            units_sold: 0,
        }
    }

    /// Money `quantity` units are worth, `None` when it does not fit a `Decimal`.
    pub fn sale_amount(&self, quantity: u32) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(quantity))
    }

    pub fn total_sales(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.units_sold))
    }
}
