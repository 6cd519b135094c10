use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a categorical breakdown (category, payment method, peak hour,
/// top product). Rows keep the grouping key, the summed value, the unit
/// count, and the row's share of the group total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    /// Grouping key, e.g. "Pizzas", "PIX", "18"
    pub label: String,

    /// Summed monetary value for this key
    pub value: Decimal,

    /// Units behind the value: line-item quantity or order count
    pub quantity: u64,

    /// Share of the total value across all rows, one decimal place
    pub percentage: Decimal,
}

impl BreakdownRow {
    pub fn new(label: impl Into<String>, value: Decimal, quantity: u64, percentage: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
            quantity,
            percentage,
        }
    }
}
