use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::core::rounding::percent_of;
use crate::modules::orders::models::{LineItem, Order};
use crate::modules::reports::models::BreakdownRow;
use crate::modules::reports::services::payment_method;

/// Generic grouping primitive behind every categorical breakdown.
///
/// Groups items by a key, sums a value and a quantity per key, and assigns
/// each row its share of the total. Output order is first-occurrence
/// insertion order.
pub struct CategoricalAggregator;

impl CategoricalAggregator {
    /// Aggregates `items` into breakdown rows. Empty input yields an empty
    /// vector; a zero total yields zero percentages, never NaN.
    pub fn aggregate<T>(
        items: &[T],
        key_fn: impl Fn(&T) -> String,
        value_fn: impl Fn(&T) -> Decimal,
        quantity_fn: impl Fn(&T) -> u64,
    ) -> Vec<BreakdownRow> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<BreakdownRow> = Vec::new();

        for item in items {
            let key = key_fn(item);
            let value = value_fn(item);
            let quantity = quantity_fn(item);

            match positions.get(&key) {
                Some(&i) => {
                    rows[i].value += value;
                    rows[i].quantity += quantity;
                }
                None => {
                    positions.insert(key.clone(), rows.len());
                    rows.push(BreakdownRow::new(key, value, quantity, Decimal::ZERO));
                }
            }
        }

        let total: Decimal = rows.iter().map(|r| r.value).sum();
        for row in &mut rows {
            row.percentage = percent_of(row.value, total);
        }

        rows
    }

    /// Revenue by menu category over the line items of realized orders.
    /// Items without a category fall into "Sem Categoria".
    pub fn category_breakdown(orders: &[Order]) -> Vec<BreakdownRow> {
        let items: Vec<&LineItem> = orders
            .iter()
            .filter(|o| o.is_realized())
            .flat_map(|o| o.line_items.iter())
            .collect();

        Self::aggregate(
            &items,
            |item| item.category_label().to_string(),
            |item| item.revenue(),
            |item| item.quantity as u64,
        )
    }

    /// Order totals grouped by normalized payment method, one row consumed
    /// per order.
    pub fn payment_breakdown(orders: &[Order]) -> Vec<BreakdownRow> {
        Self::aggregate(
            orders,
            |order| payment_method::normalize(order.payment_method.as_deref()).to_string(),
            |order| order.safe_total(),
            |_| 1,
        )
    }

    /// Order volume by hour of day. Cancelled orders still occupied the
    /// kitchen at that hour, so all orders count.
    pub fn peak_hours(orders: &[Order]) -> Vec<BreakdownRow> {
        use chrono::Timelike;

        Self::aggregate(
            orders,
            |order| format!("{:02}", order.timestamp.hour()),
            |order| order.safe_total(),
            |_| 1,
        )
    }

    /// Best sellers over realized orders, ranked by units sold descending
    /// with revenue as the tie-breaker, truncated to `limit` rows.
    /// Percentages stay relative to the full product set, not the top cut.
    pub fn top_products(orders: &[Order], limit: usize) -> Vec<BreakdownRow> {
        let items: Vec<&LineItem> = orders
            .iter()
            .filter(|o| o.is_realized())
            .flat_map(|o| o.line_items.iter())
            .collect();

        let mut rows = Self::aggregate(
            &items,
            |item| item.name.clone(),
            |item| item.revenue(),
            |item| item.quantity as u64,
        );

        rows.sort_by(|a, b| {
            b.quantity
                .cmp(&a.quantity)
                .then_with(|| b.value.cmp(&a.value))
        });
        rows.truncate(limit);
        rows
    }
}
