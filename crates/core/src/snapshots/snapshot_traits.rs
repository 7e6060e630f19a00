//! Repository trait for snapshot persistence.

use async_trait::async_trait;

use crate::adjustments::AdjustmentSnapshot;
use crate::errors::Result;
use crate::periods::Period;

use super::VehiclePeriodSnapshot;

/// Storage contract for the snapshot store. Writes are async and
/// non-transactional across rows; reads are synchronous. Conflicts between
/// adjustment-snapshot versions are resolved at read time by `saved_at`,
/// never by locking.
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Insert or overwrite the row keyed by (vehicle_id, period_start).
    async fn upsert_vehicle_snapshot(&self, snapshot: &VehiclePeriodSnapshot) -> Result<()>;

    /// The vehicle's own row whose period overlaps the given one, if any.
    /// Never merged across vehicles.
    fn get_vehicle_snapshot(
        &self,
        vehicle_id: &str,
        period: &Period,
    ) -> Result<Option<VehiclePeriodSnapshot>>;

    /// Vehicles holding a snapshot row overlapping the period.
    fn list_vehicle_ids_in_period(&self, period: &Period) -> Result<Vec<String>>;

    /// Append one adjustment-snapshot version. Versions are never updated
    /// in place; concurrent applies simply append and the read side picks
    /// the winner.
    async fn save_adjustment_snapshot(&self, snapshot: &AdjustmentSnapshot) -> Result<()>;

    /// Among stored versions overlapping the period, the one with the
    /// greatest `saved_at`.
    fn get_latest_adjustment_snapshot(&self, period: &Period)
        -> Result<Option<AdjustmentSnapshot>>;
}
