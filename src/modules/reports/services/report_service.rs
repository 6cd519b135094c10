use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::core::{ReportError, Result};
use crate::modules::orders::models::Order;
use crate::modules::orders::repositories::OrderRepository;
use crate::modules::reports::models::ReportBundle;
use crate::modules::reports::services::aggregator::CategoricalAggregator;
use crate::modules::reports::services::bucketizer::TimeSeriesBucketizer;
use crate::modules::reports::services::kpi_calculator::KpiCalculator;
use crate::modules::reports::services::period_resolver::{
    PeriodPair, PeriodResolver, PeriodType,
};

/// Orchestrates one report computation: resolve the period pair, fetch both
/// order sets, run the pure aggregation stages, assemble the bundle.
///
/// Stateless apart from its injected dependencies; construct one per
/// repository and share it freely.
pub struct ReportService {
    repository: Arc<dyn OrderRepository>,
    config: EngineConfig,
}

impl ReportService {
    /// Create a report service with default engine configuration
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self::with_config(repository, EngineConfig::default())
    }

    pub fn with_config(repository: Arc<dyn OrderRepository>, config: EngineConfig) -> Self {
        Self { repository, config }
    }

    /// Computes the report bundle for a store and period.
    ///
    /// The two range fetches run concurrently and are the only suspension
    /// point; everything after them is pure and synchronous over the
    /// in-memory snapshots. Repeated calls with identical inputs are
    /// idempotent.
    ///
    /// # Errors
    /// Only [`ReportError::Authentication`] is surfaced. A failing or
    /// timed-out repository degrades to a zeroed fallback bundle with
    /// `is_fallback = true`.
    pub async fn compute_report_bundle(
        &self,
        store_id: &str,
        period_type: PeriodType,
        now: DateTime<Utc>,
    ) -> Result<ReportBundle> {
        if store_id.trim().is_empty() {
            return Err(ReportError::authentication(
                "cannot compute a report without a store id",
            ));
        }

        let pair = PeriodResolver::resolve(now, period_type);
        debug!(
            %store_id,
            %period_type,
            current_start = %pair.current.start,
            prior_start = %pair.prior.start,
            "Computing report bundle"
        );

        let fetched = tokio::try_join!(
            self.fetch_range(store_id, &pair, true),
            self.fetch_range(store_id, &pair, false),
        );

        let (current_orders, prior_orders) = match fetched {
            Ok(sets) => sets,
            Err(err) if err.is_recoverable() => {
                warn!(%store_id, %period_type, error = %err, "Order fetch failed, serving fallback bundle");
                return Ok(self.fallback_bundle(period_type, &pair));
            }
            Err(err) => return Err(err),
        };

        let bundle = self.assemble(&current_orders, &prior_orders, period_type, &pair);

        info!(
            %store_id,
            %period_type,
            current_orders = current_orders.len(),
            prior_orders = prior_orders.len(),
            "Report bundle computed"
        );

        Ok(bundle)
    }

    /// Pure assembly over already-fetched order sets.
    ///
    /// Exposed for embedders that hold their own snapshots (or memoize by
    /// fetched-set hash); given identical inputs the output is
    /// bit-identical regardless of where or how often it runs.
    pub fn assemble(
        &self,
        current_orders: &[Order],
        prior_orders: &[Order],
        period_type: PeriodType,
        pair: &PeriodPair,
    ) -> ReportBundle {
        ReportBundle {
            kpis: KpiCalculator::calculate(current_orders, prior_orders),
            category_breakdown: CategoricalAggregator::category_breakdown(current_orders),
            payment_breakdown: CategoricalAggregator::payment_breakdown(current_orders),
            time_series: TimeSeriesBucketizer::build(
                current_orders,
                prior_orders,
                period_type,
                &pair.current,
            ),
            top_products: CategoricalAggregator::top_products(
                current_orders,
                self.config.top_products_limit,
            ),
            peak_buckets: CategoricalAggregator::peak_hours(current_orders),
            is_fallback: false,
        }
    }

    fn fallback_bundle(&self, period_type: PeriodType, pair: &PeriodPair) -> ReportBundle {
        let labels = TimeSeriesBucketizer::bucket_labels(period_type, &pair.current);
        ReportBundle::fallback(labels)
    }

    async fn fetch_range(
        &self,
        store_id: &str,
        pair: &PeriodPair,
        current: bool,
    ) -> Result<Vec<Order>> {
        let range = if current { pair.current } else { pair.prior };
        let fetch = self
            .repository
            .fetch_orders(store_id, range.start, range.end);

        match self.config.fetch_timeout {
            Some(budget) => tokio::time::timeout(budget, fetch)
                .await
                .map_err(|_| ReportError::Timeout(budget.as_millis() as u64))?,
            None => fetch.await,
        }
    }
}
