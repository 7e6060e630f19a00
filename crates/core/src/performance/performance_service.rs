use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::adjustments::{compute_profit_loss, ManualAdjustment, ManualAdjustmentRepositoryTrait};
use crate::aggregation::PeriodAggregator;
use crate::constants::{
    EARNINGS_SLAB_TABLE, RENT_SLAB_TABLE, SUMMARY_FETCH_BATCH_SIZE, SUMMARY_FETCH_TIMEOUT_SECS,
};
use crate::errors::Result;
use crate::periods::Period;
use crate::slabs::SlabConfigSourceTrait;
use crate::snapshots::SnapshotServiceTrait;
use crate::transactions::{TransactionSummary, TransactionSummarySourceTrait};
use crate::trips::{TripRecord, TripRecordSourceTrait};

use super::{PerformanceReport, ReportStats, SortBy, VehiclePerformance};

#[async_trait]
pub trait PerformanceServiceTrait: Send + Sync {
    /// Reconciles one vehicle's period. Same computation as a report row,
    /// including the degraded fallback when the transaction-history fetch
    /// fails.
    async fn compute_vehicle_performance(
        &self,
        vehicle_id: &str,
        period: &Period,
    ) -> Result<VehiclePerformance>;

    /// Builds the full report: every vehicle with at least one approved
    /// trip record in the period, sorted as requested, with portfolio
    /// statistics over the complete set. Side-effect-free and safe to
    /// retry.
    async fn build_report(&self, period: &Period, sort_by: SortBy) -> Result<PerformanceReport>;
}

pub struct PerformanceService {
    trip_source: Arc<dyn TripRecordSourceTrait>,
    slab_config: Arc<dyn SlabConfigSourceTrait>,
    summary_source: Arc<dyn TransactionSummarySourceTrait>,
    snapshot_service: Arc<dyn SnapshotServiceTrait>,
    manual_repository: Arc<dyn ManualAdjustmentRepositoryTrait>,
}

impl PerformanceService {
    pub fn new(
        trip_source: Arc<dyn TripRecordSourceTrait>,
        slab_config: Arc<dyn SlabConfigSourceTrait>,
        summary_source: Arc<dyn TransactionSummarySourceTrait>,
        snapshot_service: Arc<dyn SnapshotServiceTrait>,
        manual_repository: Arc<dyn ManualAdjustmentRepositoryTrait>,
    ) -> Self {
        PerformanceService {
            trip_source,
            slab_config,
            summary_source,
            snapshot_service,
            manual_repository,
        }
    }

    /// Loads both slab tables and builds the aggregator. A malformed table
    /// is fatal here, before any row is computed; the error names the table
    /// and the violated rule.
    fn load_aggregator(&self) -> Result<PeriodAggregator> {
        let rent = self.slab_config.load(RENT_SLAB_TABLE)?;
        let earnings = self.slab_config.load(EARNINGS_SLAB_TABLE)?;
        Ok(PeriodAggregator::new(
            rent.into_resolver(),
            earnings.into_resolver(),
        ))
    }

    /// Fetches one vehicle's transaction summary under the per-fetch
    /// deadline. A failed or elapsed fetch yields the zero summary and marks
    /// the vehicle degraded; a hung ledger call must not stall the caller.
    async fn fetch_summary(&self, vehicle_id: &str, period: &Period) -> (TransactionSummary, bool) {
        let deadline = Duration::from_secs(SUMMARY_FETCH_TIMEOUT_SECS);
        match tokio::time::timeout(deadline, self.summary_source.get(vehicle_id, period)).await {
            Ok(Ok(summary)) => (summary, false),
            Ok(Err(e)) => {
                warn!(
                    "Transaction summary fetch failed for vehicle '{}' ({}): {}. \
                     Using zero transaction layer, row marked degraded.",
                    vehicle_id, period, e
                );
                (TransactionSummary::zero(vehicle_id), true)
            }
            Err(_) => {
                warn!(
                    "Transaction summary fetch for vehicle '{}' ({}) exceeded {}s. \
                     Using zero transaction layer, row marked degraded.",
                    vehicle_id, period, SUMMARY_FETCH_TIMEOUT_SECS
                );
                (TransactionSummary::zero(vehicle_id), true)
            }
        }
    }

    /// Fetches transaction summaries for all vehicles in bounded-parallel
    /// batches.
    async fn fetch_summaries(
        &self,
        vehicle_ids: &[String],
        period: &Period,
    ) -> BTreeMap<String, (TransactionSummary, bool)> {
        let mut summaries = BTreeMap::new();

        for chunk in vehicle_ids.chunks(SUMMARY_FETCH_BATCH_SIZE) {
            let futures: Vec<_> = chunk
                .iter()
                .map(|vehicle_id| async move {
                    let (summary, degraded) = self.fetch_summary(vehicle_id, period).await;
                    (vehicle_id.clone(), summary, degraded)
                })
                .collect();

            for (vehicle_id, summary, degraded) in futures::future::join_all(futures).await {
                summaries.insert(vehicle_id, (summary, degraded));
            }
        }

        summaries
    }

    fn build_row(
        &self,
        vehicle_id: &str,
        period: &Period,
        aggregator: &PeriodAggregator,
        records: &[TripRecord],
        summary: &TransactionSummary,
        degraded: bool,
    ) -> Result<VehiclePerformance> {
        let loaded = self.snapshot_service.load_snapshot(vehicle_id, period)?;
        let totals = aggregator.aggregate(
            vehicle_id,
            period,
            records,
            loaded.working_day_multiplier,
        );

        let manual = self
            .manual_repository
            .get_for_vehicle(vehicle_id)?
            .unwrap_or_else(|| ManualAdjustment::zero(vehicle_id));

        let breakdown = compute_profit_loss(&totals, &manual, &loaded.categories, summary);

        Ok(VehiclePerformance {
            vehicle_id: vehicle_id.to_string(),
            cumulative_trips: totals.cumulative_trips,
            worked_days: totals.worked_days,
            cumulative_earnings: totals.cumulative_earnings,
            total_rent: totals.total_rent,
            working_day_multiplier: loaded.working_day_multiplier,
            avg_trips_per_day: totals.avg_trips_per_day,
            avg_earnings_per_day: totals.avg_earnings_per_day,
            profit_loss: breakdown.profit_loss,
            status: breakdown.status,
            degraded,
        })
    }

    fn sort_rows(rows: &mut [VehiclePerformance], sort_by: SortBy) {
        rows.sort_by(|a, b| {
            let ordering = match sort_by {
                SortBy::Profit => b.profit_loss.cmp(&a.profit_loss),
                SortBy::Loss => a.profit_loss.cmp(&b.profit_loss),
                SortBy::Trips => b.cumulative_trips.cmp(&a.cumulative_trips),
                SortBy::Earnings => b.cumulative_earnings.cmp(&a.cumulative_earnings),
            };
            ordering.then_with(|| a.vehicle_id.cmp(&b.vehicle_id))
        });
    }

    fn compute_stats(rows: &[VehiclePerformance]) -> ReportStats {
        let mut stats = ReportStats {
            total_vehicles: rows.len(),
            ..Default::default()
        };
        for row in rows {
            if row.profit_loss > Decimal::ZERO {
                stats.profitable_vehicles += 1;
                stats.total_profit += row.profit_loss;
            } else if row.profit_loss < Decimal::ZERO {
                stats.total_loss += row.profit_loss.abs();
            }
            stats.total_trips += u64::from(row.cumulative_trips);
            stats.total_earnings += row.cumulative_earnings;
            stats.total_rent += row.total_rent;
        }
        stats
    }
}

#[async_trait]
impl PerformanceServiceTrait for PerformanceService {
    async fn compute_vehicle_performance(
        &self,
        vehicle_id: &str,
        period: &Period,
    ) -> Result<VehiclePerformance> {
        let aggregator = self.load_aggregator()?;
        let records = self
            .trip_source
            .get_approved_records(Some(vehicle_id), period)?;

        let (summary, degraded) = self.fetch_summary(vehicle_id, period).await;

        self.build_row(vehicle_id, period, &aggregator, &records, &summary, degraded)
    }

    async fn build_report(&self, period: &Period, sort_by: SortBy) -> Result<PerformanceReport> {
        let aggregator = self.load_aggregator()?;

        let records = self.trip_source.get_approved_records(None, period)?;
        let mut records_by_vehicle: BTreeMap<String, Vec<TripRecord>> = BTreeMap::new();
        for record in records {
            records_by_vehicle
                .entry(record.vehicle_id.clone())
                .or_default()
                .push(record);
        }

        let vehicle_ids: Vec<String> = records_by_vehicle.keys().cloned().collect();
        debug!(
            "Building performance report for {} over {} vehicles",
            period,
            vehicle_ids.len()
        );

        let summaries = self.fetch_summaries(&vehicle_ids, period).await;

        let mut rows = Vec::with_capacity(vehicle_ids.len());
        for (vehicle_id, vehicle_records) in &records_by_vehicle {
            let (summary, degraded) = summaries
                .get(vehicle_id)
                .cloned()
                .unwrap_or_else(|| (TransactionSummary::zero(vehicle_id.clone()), true));
            rows.push(self.build_row(
                vehicle_id,
                period,
                &aggregator,
                vehicle_records,
                &summary,
                degraded,
            )?);
        }

        let stats = Self::compute_stats(&rows);
        Self::sort_rows(&mut rows, sort_by);

        Ok(PerformanceReport { rows, stats })
    }
}
