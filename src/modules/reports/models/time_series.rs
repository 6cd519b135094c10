use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aligned current/prior revenue series for trend charts.
///
/// Both series always have exactly one entry per bucket label, in fixed
/// chronological order, so they can be overlaid directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub bucket_labels: Vec<String>,
    pub current: Vec<Decimal>,
    pub prior: Vec<Decimal>,
}

impl TimeSeries {
    /// An all-zero series over the given labels
    pub fn zeroed(bucket_labels: Vec<String>) -> Self {
        let len = bucket_labels.len();
        Self {
            bucket_labels,
            current: vec![Decimal::ZERO; len],
            prior: vec![Decimal::ZERO; len],
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_labels.len()
    }
}
