use serde::{Deserialize, Serialize};

use super::breakdown::BreakdownRow;
use super::metric::KpiSet;
use super::time_series::TimeSeries;

/// The complete output of one report computation.
///
/// Constructed fresh per request and never mutated afterwards; the engine
/// hands ownership to the caller and keeps nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportBundle {
    pub kpis: KpiSet,

    /// Revenue by menu category over realized orders
    pub category_breakdown: Vec<BreakdownRow>,

    /// Order totals by normalized payment method
    pub payment_breakdown: Vec<BreakdownRow>,

    /// Aligned current/prior revenue trend
    pub time_series: TimeSeries,

    /// Best sellers ranked by units sold, then revenue
    pub top_products: Vec<BreakdownRow>,

    /// Order volume by hour of day
    pub peak_buckets: Vec<BreakdownRow>,

    /// True when this bundle was substituted after a fetch or computation
    /// failure; zeros in a fallback bundle are not real observations
    pub is_fallback: bool,
}

impl ReportBundle {
    /// Structurally complete bundle with every numeric field zeroed.
    ///
    /// Callers distinguish this from a genuinely quiet period via
    /// `is_fallback`; the engine never fabricates nonzero numbers to mask a
    /// failure.
    pub fn fallback(bucket_labels: Vec<String>) -> Self {
        Self {
            kpis: KpiSet::zeroed(),
            category_breakdown: Vec::new(),
            payment_breakdown: Vec::new(),
            time_series: TimeSeries::zeroed(bucket_labels),
            top_products: Vec::new(),
            peak_buckets: Vec::new(),
            is_fallback: true,
        }
    }
}
