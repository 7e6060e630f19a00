//! Source trait for approved trip records.

use crate::errors::Result;
use crate::periods::Period;

use super::TripRecord;

/// Read-only access to approved trip records. The ingestion and approval
/// workflow lives upstream; implementations must only return records with
/// approved status whose dates fall inside the period.
pub trait TripRecordSourceTrait: Send + Sync {
    /// Approved records in the period, optionally narrowed to one vehicle.
    fn get_approved_records(
        &self,
        vehicle_id: Option<&str>,
        period: &Period,
    ) -> Result<Vec<TripRecord>>;
}
