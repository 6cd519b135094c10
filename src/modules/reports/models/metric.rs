use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A top-line figure together with its period-over-period variance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Current-period value
    pub value: Decimal,

    /// Percentage change against the prior period, one decimal place
    pub variance: Decimal,
}

impl Metric {
    pub fn new(value: Decimal, variance: Decimal) -> Self {
        Self { value, variance }
    }

    /// A zero value with zero variance
    pub fn zero() -> Self {
        Self {
            value: Decimal::ZERO,
            variance: Decimal::ZERO,
        }
    }
}

/// Top-line KPIs for a reporting period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSet {
    /// Revenue over realized orders
    pub revenue: Metric,

    /// Count of all orders regardless of status
    pub order_count: Metric,

    /// Average ticket over realized orders
    pub ticket_average: Metric,

    /// Cancelled share of all orders, as a percentage
    pub cancellation_rate: Metric,

    /// Distinct customers by phone (name when phone absent)
    pub unique_customers: Metric,

    /// Not yet computed: waiting on a ratings feed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_rating: Option<Metric>,

    /// Not yet computed: waiting on delivery telemetry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_delivery_minutes: Option<Metric>,
}

impl KpiSet {
    /// All-zero KPI set, used for empty datasets and fallback bundles
    pub fn zeroed() -> Self {
        Self {
            revenue: Metric::zero(),
            order_count: Metric::zero(),
            ticket_average: Metric::zero(),
            cancellation_rate: Metric::zero(),
            unique_customers: Metric::zero(),
            customer_rating: None,
            avg_delivery_minutes: None,
        }
    }
}
