pub mod breakdown;
pub mod metric;
pub mod report_bundle;
pub mod time_series;

pub use breakdown::BreakdownRow;
pub use metric::{KpiSet, Metric};
pub use report_bundle::ReportBundle;
pub use time_series::TimeSeries;
