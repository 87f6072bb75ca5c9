use getset::{CopyGetters, Getters, Setters};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, Setters)]
pub struct Salesperson {
    #[getset(get = "pub")]
    document_type: String,
    #[getset(get_copy = "pub")]
    document_number: u64,
    #[getset(get = "pub")]
    first_names: String,
    #[getset(get = "pub")]
    last_names: String,
    #[getset(get_copy = "pub", set = "pub(crate)")]
    revenue_collected: Decimal,
}

impl Salesperson {
    pub fn new(
        document_type: impl Into<String>,
        document_number: u64,
        first_names: impl Into<String>,
        last_names: impl Into<String>,
    ) -> Salesperson {
        Salesperson {
            document_type: document_type.into(),
            document_number,
            first_names: first_names.into(),
            last_names: last_names.into(),
            revenue_collected: Decimal::ZERO,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_names)
    }
}
