//! Restaurant back-office reporting and analytics engine.
//!
//! Turns raw order records into period-bucketed KPIs, comparative time
//! series, and categorical breakdowns, assembled into an immutable
//! [`ReportBundle`]. The engine is a pure computation layer: the order
//! source is an injected [`OrderRepository`] adapter, and everything after
//! the fetch runs synchronously over in-memory snapshots.
//!
//! ```no_run
//! use std::sync::Arc;
//! use chrono::Utc;
//! use comanda::{InMemoryOrderRepository, PeriodType, ReportService};
//!
//! # async fn demo() -> comanda::Result<()> {
//! let repository = Arc::new(InMemoryOrderRepository::new(vec![]));
//! let service = ReportService::new(repository);
//!
//! let bundle = service
//!     .compute_report_bundle("store-1", PeriodType::Weekly, Utc::now())
//!     .await?;
//! assert!(!bundle.is_fallback);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod modules;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{ReportError, Result};
pub use config::EngineConfig;
pub use modules::orders::models::{Customer, LineItem, Order, OrderStatus};
pub use modules::orders::repositories::{InMemoryOrderRepository, OrderRepository};
pub use modules::reports::models::{BreakdownRow, KpiSet, Metric, ReportBundle, TimeSeries};
pub use modules::reports::services::{
    CategoricalAggregator, GrowthCalculator, KpiCalculator, PeriodPair, PeriodRange,
    PeriodResolver, PeriodType, ReportService, TimeSeriesBucketizer,
};
