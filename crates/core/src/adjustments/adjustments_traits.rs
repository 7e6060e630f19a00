//! Repository trait for manual per-vehicle adjustments.

use async_trait::async_trait;

use crate::errors::Result;

use super::ManualAdjustment;

#[async_trait]
pub trait ManualAdjustmentRepositoryTrait: Send + Sync {
    /// The vehicle's manual entry, if the operator has saved one.
    fn get_for_vehicle(&self, vehicle_id: &str) -> Result<Option<ManualAdjustment>>;

    /// Insert or overwrite the vehicle's manual entry.
    async fn upsert(&self, adjustment: &ManualAdjustment) -> Result<()>;
}
