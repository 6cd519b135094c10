use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category assigned to line items whose source record carries none
pub const UNCATEGORIZED: &str = "Sem Categoria";

/// A single product line inside an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name as sold
    pub name: String,

    /// Menu category; missing in older records
    #[serde(default)]
    pub category: Option<String>,

    /// Price per unit
    #[serde(default)]
    pub unit_price: Decimal,

    /// Units sold
    #[serde(default)]
    pub quantity: u32,
}

impl LineItem {
    /// Revenue contributed by this line: unit_price × quantity
    pub fn revenue(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Category label with the uncategorized default applied
    pub fn category_label(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(UNCATEGORIZED)
    }
}
