use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::{ReportError, Result};
use crate::modules::orders::models::Order;

/// Source of order records for a store within a time window.
///
/// Implementations must return every order with
/// `timestamp ∈ [range_start, range_end)` for the given store, and must
/// fail with [`ReportError::Authentication`] when no store context can be
/// resolved for the request.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn fetch_orders(
        &self,
        store_id: &str,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> Result<Vec<Order>>;
}

/// Repository backed by an in-memory order list.
///
/// Used by tests and by embedders that already hold the order snapshot in
/// memory; the filtering mirrors the half-open range contract a real
/// adapter must honor.
pub struct InMemoryOrderRepository {
    orders: Vec<Order>,
}

impl InMemoryOrderRepository {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn fetch_orders(
        &self,
        store_id: &str,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> Result<Vec<Order>> {
        if store_id.trim().is_empty() {
            return Err(ReportError::authentication("no store id in request"));
        }

        Ok(self
            .orders
            .iter()
            .filter(|o| {
                o.store_id == store_id && o.timestamp >= range_start && o.timestamp < range_end
            })
            .cloned()
            .collect())
    }
}
