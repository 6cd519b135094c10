// An order as received from the back-office data store. Records arrive from
// a store the engine does not control, so ingestion is tolerant: missing
// amounts default to zero, unknown statuses map to a catch-all variant, and
// optional customer/payment fields stay optional until aggregation applies
// its defaults.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;

/// Order fulfillment lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Completed,
    Cancelled,
    /// Any status the engine does not recognize; counted in order totals
    /// but never toward revenue
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Whether the order reached completed fulfillment and counts toward
    /// revenue-based metrics.
    pub fn is_realized(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Completed)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::New => "new",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Customer contact attached to an order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,
}

impl Customer {
    /// Key used for distinct-customer counting: phone when present,
    /// otherwise name. `None` means the customer is unidentifiable and is
    /// not counted.
    pub fn identity_key(&self) -> Option<&str> {
        self.phone
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .or_else(|| self.name.as_deref().filter(|n| !n.trim().is_empty()))
    }
}

/// A single order record fetched for a store and period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,

    pub store_id: String,

    /// Sole ordering and bucketing key
    pub timestamp: DateTime<Utc>,

    #[serde(default = "default_status")]
    pub status: OrderStatus,

    /// Order total; a record missing this field is treated as zero
    #[serde(default)]
    pub total: Decimal,

    /// Free-text payment method, normalized during aggregation
    #[serde(default)]
    pub payment_method: Option<String>,

    #[serde(default)]
    pub customer: Customer,

    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

fn default_status() -> OrderStatus {
    OrderStatus::Unknown
}

impl Order {
    /// Order total clamped to the non-negative domain the reports assume.
    /// Negative totals only appear in corrupt records; they are floored at
    /// zero instead of poisoning revenue sums.
    pub fn safe_total(&self) -> Decimal {
        if self.total < Decimal::ZERO {
            Decimal::ZERO
        } else {
            self.total
        }
    }

    pub fn is_realized(&self) -> bool {
        self.status.is_realized()
    }
}
