use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Period totals for one vehicle, before adjustments.
///
/// `total_rent` comes from a single rent-table resolution on the cumulative
/// trip count, multiplied by the working-day multiplier;
/// `cumulative_earnings` is the sum of per-day earnings-table resolutions.
/// The asymmetry is deliberate and guarded by regression tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub cumulative_trips: u32,
    pub worked_days: u32,
    pub cumulative_earnings: Decimal,
    pub total_rent: Decimal,
    pub avg_trips_per_day: Decimal,
    pub avg_earnings_per_day: Decimal,
}
