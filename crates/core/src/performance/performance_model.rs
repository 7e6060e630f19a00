use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::adjustments::PerformanceStatus;

/// One vehicle's reconciled period result. Derived on every report request;
/// never persisted as a source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePerformance {
    pub vehicle_id: String,
    pub cumulative_trips: u32,
    pub worked_days: u32,
    pub cumulative_earnings: Decimal,
    pub total_rent: Decimal,
    pub working_day_multiplier: u32,
    pub avg_trips_per_day: Decimal,
    pub avg_earnings_per_day: Decimal,
    pub profit_loss: Decimal,
    pub status: PerformanceStatus,
    /// True when the transaction-history fetch failed and the row was
    /// computed with a zero transaction layer. Surfaced, never hidden.
    pub degraded: bool,
}

/// Requested report ordering. Ties always break by vehicle_id ascending so
/// repeated builds are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// profit_loss descending
    Profit,
    /// profit_loss ascending, most negative first
    Loss,
    /// cumulative_trips descending
    Trips,
    /// cumulative_earnings descending
    Earnings,
}

/// Portfolio statistics over the full vehicle set, independent of the
/// requested sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total_vehicles: usize,
    pub profitable_vehicles: usize,
    /// Sum of the positive profit/loss figures.
    pub total_profit: Decimal,
    /// Absolute sum of the negative profit/loss figures.
    pub total_loss: Decimal,
    pub total_trips: u64,
    pub total_earnings: Decimal,
    pub total_rent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub rows: Vec<VehiclePerformance>,
    pub stats: ReportStats,
}
