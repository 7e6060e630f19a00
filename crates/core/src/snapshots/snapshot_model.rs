use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::adjustments::AdjustmentCategory;
use crate::constants::DEFAULT_WORKING_DAY_MULTIPLIER;

/// One row per (vehicle, period_start): the vehicle-local working-day
/// multiplier. The period's category snapshot is canonical and lives in
/// [`crate::adjustments::AdjustmentSnapshot`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePeriodSnapshot {
    pub vehicle_id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub working_day_multiplier: u32,
}

/// Everything the ledger needs from the store for one vehicle: the
/// vehicle's own multiplier (defaulted when it has no row) and the latest
/// applied category set for the period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedVehicleSnapshot {
    pub working_day_multiplier: u32,
    pub categories: Vec<AdjustmentCategory>,
}

impl Default for LoadedVehicleSnapshot {
    fn default() -> Self {
        LoadedVehicleSnapshot {
            working_day_multiplier: DEFAULT_WORKING_DAY_MULTIPLIER,
            categories: Vec::new(),
        }
    }
}

/// Outcome of a global-adjustment apply. With the canonical period-keyed
/// snapshot there is a single write, so `failed_vehicle_ids` stays empty;
/// `applied_count` is the number of vehicles confirmed covered, and drops
/// to 0 when the snapshot was written but the coverage enumeration failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedAdjustments {
    pub applied_count: usize,
    pub failed_vehicle_ids: Vec<String>,
}
