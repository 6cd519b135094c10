use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::core::rounding::{percent_of, round_money};
use crate::modules::orders::models::Order;
use crate::modules::reports::models::{KpiSet, Metric};
use crate::modules::reports::services::growth::GrowthCalculator;

/// Aggregates an order set into top-line metrics with period-over-period
/// variance. Pure and synchronous; identical inputs always produce an
/// identical `KpiSet`.
pub struct KpiCalculator;

/// Raw figures for one period, computed once and compared across periods
#[derive(Debug, Default, Clone, Copy)]
struct PeriodFigures {
    revenue: Decimal,
    order_count: Decimal,
    ticket_average: Decimal,
    cancellation_rate: Decimal,
    unique_customers: Decimal,
}

impl KpiCalculator {
    /// Computes the KPI set for the current period, with each metric's
    /// variance taken against the same formula over the prior period.
    /// Empty inputs yield all-zero metrics, not an error.
    pub fn calculate(current_orders: &[Order], prior_orders: &[Order]) -> KpiSet {
        let current = Self::figures(current_orders);
        let prior = Self::figures(prior_orders);

        KpiSet {
            revenue: Self::metric(current.revenue, prior.revenue),
            order_count: Self::metric(current.order_count, prior.order_count),
            ticket_average: Self::metric(current.ticket_average, prior.ticket_average),
            cancellation_rate: Self::metric(current.cancellation_rate, prior.cancellation_rate),
            unique_customers: Self::metric(current.unique_customers, prior.unique_customers),
            customer_rating: None,
            avg_delivery_minutes: None,
        }
    }

    fn metric(current: Decimal, prior: Decimal) -> Metric {
        Metric::new(current, GrowthCalculator::variance(current, prior))
    }

    fn figures(orders: &[Order]) -> PeriodFigures {
        if orders.is_empty() {
            return PeriodFigures::default();
        }

        let realized: Vec<&Order> = orders.iter().filter(|o| o.is_realized()).collect();

        let revenue: Decimal = realized.iter().map(|o| o.safe_total()).sum();

        let cancelled = orders.iter().filter(|o| o.status.is_cancelled()).count();

        let ticket_average = if realized.is_empty() {
            Decimal::ZERO
        } else {
            round_money(revenue / Decimal::from(realized.len()))
        };

        let unique_customers: HashSet<&str> = orders
            .iter()
            .filter_map(|o| o.customer.identity_key())
            .collect();

        PeriodFigures {
            revenue,
            order_count: Decimal::from(orders.len()),
            ticket_average,
            cancellation_rate: percent_of(Decimal::from(cancelled), Decimal::from(orders.len())),
            unique_customers: Decimal::from(unique_customers.len()),
        }
    }
}
