pub mod models;
pub mod services;

pub use models::{BreakdownRow, KpiSet, Metric, ReportBundle, TimeSeries};
pub use services::{PeriodType, ReportService};
