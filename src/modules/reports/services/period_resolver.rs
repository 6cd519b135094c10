use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Reporting period granularity requested by a report screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Daily,
    Weekly,
    Monthly,
}

impl PeriodType {
    /// Parses a request parameter, falling back to `Weekly` for anything
    /// unrecognized. Report screens send free-form strings; an unknown
    /// period must degrade, not fail.
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "daily" => PeriodType::Daily,
            "weekly" => PeriodType::Weekly,
            "monthly" => PeriodType::Monthly,
            _ => PeriodType::Weekly,
        }
    }
}

impl Default for PeriodType {
    fn default() -> Self {
        PeriodType::Weekly
    }
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodType::Daily => write!(f, "daily"),
            PeriodType::Weekly => write!(f, "weekly"),
            PeriodType::Monthly => write!(f, "monthly"),
        }
    }
}

/// Half-open time interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PeriodRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

/// Current period plus the immediately preceding comparable period.
///
/// `prior` always spans a full period even when `current` is cut off at
/// "now", so rate-based comparisons are not biased by partial data alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPair {
    pub current: PeriodRange,
    pub prior: PeriodRange,
}

/// Resolves the current and prior date ranges for a reference instant
pub struct PeriodResolver;

impl PeriodResolver {
    /// Computes the `{current, prior}` ranges for `now`.
    ///
    /// - Daily: current runs from midnight to `now`; prior is the full
    ///   previous day.
    /// - Weekly: current runs from the most recent Sunday 00:00 to `now`;
    ///   prior is the preceding full 7-day window.
    /// - Monthly: current runs from the 1st of the month to `now`; prior is
    ///   the full previous calendar month.
    pub fn resolve(now: DateTime<Utc>, period_type: PeriodType) -> PeriodPair {
        match period_type {
            PeriodType::Daily => {
                let midnight = Self::midnight(now);
                PeriodPair {
                    current: PeriodRange::new(midnight, now),
                    prior: PeriodRange::new(midnight - Duration::days(1), midnight),
                }
            }
            PeriodType::Weekly => {
                let days_back = now.weekday().num_days_from_sunday() as i64;
                let week_start = Self::midnight(now) - Duration::days(days_back);
                PeriodPair {
                    current: PeriodRange::new(week_start, now),
                    prior: PeriodRange::new(week_start - Duration::days(7), week_start),
                }
            }
            PeriodType::Monthly => {
                let month_start = Self::first_of_month(now);
                let prior_start = Self::first_of_previous_month(now);
                PeriodPair {
                    current: PeriodRange::new(month_start, now),
                    prior: PeriodRange::new(prior_start, month_start),
                }
            }
        }
    }

    fn midnight(instant: DateTime<Utc>) -> DateTime<Utc> {
        instant.date_naive().and_time(NaiveTime::MIN).and_utc()
    }

    fn first_of_month(instant: DateTime<Utc>) -> DateTime<Utc> {
        instant
            .date_naive()
            .with_day(1)
            .expect("day 1 exists in every month")
            .and_time(NaiveTime::MIN)
            .and_utc()
    }

    fn first_of_previous_month(instant: DateTime<Utc>) -> DateTime<Utc> {
        let date = instant.date_naive();
        let (year, month) = if date.month() == 1 {
            (date.year() - 1, 12)
        } else {
            (date.year(), date.month() - 1)
        };
        chrono::NaiveDate::from_ymd_opt(year, month, 1)
            .expect("day 1 exists in every month")
            .and_time(NaiveTime::MIN)
            .and_utc()
    }
}
