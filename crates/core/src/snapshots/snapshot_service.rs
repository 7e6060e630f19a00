use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};

use crate::adjustments::{AdjustmentCategory, AdjustmentSnapshot};
use crate::errors::{Result, ValidationError};
use crate::periods::Period;

use super::{
    AppliedAdjustments, LoadedVehicleSnapshot, SnapshotRepositoryTrait, VehiclePeriodSnapshot,
};

#[async_trait]
pub trait SnapshotServiceTrait: Send + Sync {
    /// Explicit-save path for the vehicle-local working-day multiplier.
    /// Overwrites the vehicle's row for the period; rejects multipliers
    /// below 1.
    async fn set_working_day_multiplier(
        &self,
        vehicle_id: &str,
        period: &Period,
        days: u32,
    ) -> Result<()>;

    /// Writes one canonical category snapshot for the period, stamped with
    /// the current time. No rollback and no retry; a caller that wants the
    /// write retried issues it again.
    async fn apply_global_adjustments(
        &self,
        period: &Period,
        categories: Vec<AdjustmentCategory>,
    ) -> Result<AppliedAdjustments>;

    /// The vehicle's multiplier (default 1 without a row) plus the latest
    /// applied category set for the period (empty without one).
    fn load_snapshot(&self, vehicle_id: &str, period: &Period) -> Result<LoadedVehicleSnapshot>;

    /// The latest applied category set for the period, vehicle-independent.
    fn latest_categories(&self, period: &Period) -> Result<Vec<AdjustmentCategory>>;
}

pub struct SnapshotService {
    repository: Arc<dyn SnapshotRepositoryTrait>,
}

impl SnapshotService {
    pub fn new(repository: Arc<dyn SnapshotRepositoryTrait>) -> Self {
        SnapshotService { repository }
    }
}

#[async_trait]
impl SnapshotServiceTrait for SnapshotService {
    async fn set_working_day_multiplier(
        &self,
        vehicle_id: &str,
        period: &Period,
        days: u32,
    ) -> Result<()> {
        if days < 1 {
            return Err(ValidationError::WorkingDaysOutOfRange(days).into());
        }
        let snapshot = VehiclePeriodSnapshot {
            vehicle_id: vehicle_id.to_string(),
            period_start: period.start(),
            period_end: period.end(),
            working_day_multiplier: days,
        };
        self.repository.upsert_vehicle_snapshot(&snapshot).await?;
        debug!(
            "Saved working-day multiplier {} for vehicle '{}' period {}",
            days, vehicle_id, period
        );
        Ok(())
    }

    async fn apply_global_adjustments(
        &self,
        period: &Period,
        categories: Vec<AdjustmentCategory>,
    ) -> Result<AppliedAdjustments> {
        let snapshot = AdjustmentSnapshot {
            period_start: period.start(),
            period_end: period.end(),
            categories,
            saved_at: Utc::now(),
        };
        self.repository.save_adjustment_snapshot(&snapshot).await?;

        // The snapshot now governs every vehicle in the period. Coverage
        // enumeration is reporting only; its failure degrades the result
        // instead of undoing the applied snapshot.
        match self.repository.list_vehicle_ids_in_period(period) {
            Ok(vehicle_ids) => Ok(AppliedAdjustments {
                applied_count: vehicle_ids.len(),
                failed_vehicle_ids: Vec::new(),
            }),
            Err(e) => {
                warn!(
                    "Adjustment snapshot for {} applied, but vehicle enumeration failed: {}",
                    period, e
                );
                Ok(AppliedAdjustments {
                    applied_count: 0,
                    failed_vehicle_ids: Vec::new(),
                })
            }
        }
    }

    fn load_snapshot(&self, vehicle_id: &str, period: &Period) -> Result<LoadedVehicleSnapshot> {
        let multiplier = self
            .repository
            .get_vehicle_snapshot(vehicle_id, period)?
            .map(|row| row.working_day_multiplier)
            .unwrap_or(crate::constants::DEFAULT_WORKING_DAY_MULTIPLIER);

        let categories = self.latest_categories(period)?;

        Ok(LoadedVehicleSnapshot {
            working_day_multiplier: multiplier,
            categories,
        })
    }

    fn latest_categories(&self, period: &Period) -> Result<Vec<AdjustmentCategory>> {
        Ok(self
            .repository
            .get_latest_adjustment_snapshot(period)?
            .map(|snapshot| snapshot.categories)
            .unwrap_or_default())
    }
}
