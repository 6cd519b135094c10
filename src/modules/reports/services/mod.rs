pub mod aggregator;
pub mod bucketizer;
pub mod growth;
pub mod kpi_calculator;
pub mod payment_method;
pub mod period_resolver;
pub mod report_service;

pub use aggregator::CategoricalAggregator;
pub use bucketizer::TimeSeriesBucketizer;
pub use growth::GrowthCalculator;
pub use kpi_calculator::KpiCalculator;
pub use period_resolver::{PeriodPair, PeriodRange, PeriodResolver, PeriodType};
pub use report_service::ReportService;
