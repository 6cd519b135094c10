use chrono::{DateTime, Datelike, Timelike, Utc};
use rust_decimal::Decimal;

use crate::modules::orders::models::Order;
use crate::modules::reports::models::TimeSeries;
use crate::modules::reports::services::period_resolver::{PeriodRange, PeriodType};

/// Fixed weekday labels starting on Sunday. A constant table, not locale
/// formatting: chart alignment must not change with the host machine.
const WEEKDAY_LABELS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// Groups orders into aligned current/prior revenue series.
///
/// Bucket membership is a pure function of the order timestamp and the
/// period type; both series are emitted over the same ordered label
/// sequence so report screens can overlay them directly.
pub struct TimeSeriesBucketizer;

impl TimeSeriesBucketizer {
    /// Builds the aligned trend series for the two order sets.
    ///
    /// The bucket layout is derived from the current period: 24 hours for
    /// daily, 7 weekdays for weekly, one bucket per calendar day of the
    /// current month for monthly. Prior-period timestamps that have no
    /// counterpart bucket (day 31 against a 30-day current month) are
    /// dropped; buckets without orders stay at zero.
    pub fn build(
        current_orders: &[Order],
        prior_orders: &[Order],
        period_type: PeriodType,
        current_range: &PeriodRange,
    ) -> TimeSeries {
        let bucket_labels = Self::bucket_labels(period_type, current_range);
        let bucket_count = bucket_labels.len();

        TimeSeries {
            bucket_labels,
            current: Self::series(current_orders, period_type, bucket_count),
            prior: Self::series(prior_orders, period_type, bucket_count),
        }
    }

    /// Ordered bucket labels for the period. Always chronological/fixed
    /// order, never sorted by value.
    pub fn bucket_labels(period_type: PeriodType, current_range: &PeriodRange) -> Vec<String> {
        match period_type {
            PeriodType::Daily => (0..24).map(|h| format!("{:02}", h)).collect(),
            PeriodType::Weekly => WEEKDAY_LABELS.iter().map(|l| l.to_string()).collect(),
            PeriodType::Monthly => {
                let days = Self::days_in_month(current_range.start);
                (1..=days).map(|d| format!("{:02}", d)).collect()
            }
        }
    }

    fn series(orders: &[Order], period_type: PeriodType, bucket_count: usize) -> Vec<Decimal> {
        let mut buckets = vec![Decimal::ZERO; bucket_count];

        for order in orders.iter().filter(|o| o.is_realized()) {
            let index = Self::bucket_index(order.timestamp, period_type);
            if index < bucket_count {
                buckets[index] += order.safe_total();
            }
        }

        buckets
    }

    fn bucket_index(timestamp: DateTime<Utc>, period_type: PeriodType) -> usize {
        match period_type {
            PeriodType::Daily => timestamp.hour() as usize,
            PeriodType::Weekly => timestamp.weekday().num_days_from_sunday() as usize,
            PeriodType::Monthly => timestamp.day() as usize - 1,
        }
    }

    fn days_in_month(instant: DateTime<Utc>) -> u32 {
        let date = instant.date_naive();
        let (next_year, next_month) = if date.month() == 12 {
            (date.year() + 1, 1)
        } else {
            (date.year(), date.month() + 1)
        };
        let first_of_next = chrono::NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .expect("day 1 exists in every month");
        let first = date.with_day(1).expect("day 1 exists in every month");
        (first_of_next - first).num_days() as u32
    }
}
