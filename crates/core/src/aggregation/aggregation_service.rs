use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::periods::Period;
use crate::slabs::RateResolver;
use crate::trips::TripRecord;

use super::PeriodTotals;

/// Aggregates one vehicle's approved trip records over a period.
///
/// Holds both resolvers so the two conventions cannot be swapped at a call
/// site: rent always resolves once on the period's cumulative trip count,
/// earnings always resolve per day.
pub struct PeriodAggregator {
    rent_resolver: Arc<dyn RateResolver>,
    earnings_resolver: Arc<dyn RateResolver>,
}

impl PeriodAggregator {
    pub fn new(
        rent_resolver: Arc<dyn RateResolver>,
        earnings_resolver: Arc<dyn RateResolver>,
    ) -> Self {
        PeriodAggregator {
            rent_resolver,
            earnings_resolver,
        }
    }

    /// Computes period totals from the given records. Records outside the
    /// period or not approved are skipped; the source contract already
    /// filters them, this guards against a misbehaving implementation.
    pub fn aggregate(
        &self,
        vehicle_id: &str,
        period: &Period,
        records: &[TripRecord],
        working_day_multiplier: u32,
    ) -> PeriodTotals {
        let mut cumulative_trips: u32 = 0;
        let mut worked_days: u32 = 0;
        let mut cumulative_earnings = Decimal::ZERO;

        for record in records {
            if !record.is_approved() || record.vehicle_id != vehicle_id {
                continue;
            }
            if !period.contains(record.date) {
                continue;
            }
            cumulative_trips += record.trip_count;
            worked_days += 1;
            cumulative_earnings += self.earnings_resolver.resolve(record.trip_count);
        }

        let total_rent =
            self.rent_resolver.resolve(cumulative_trips) * Decimal::from(working_day_multiplier);

        // Worked days (days with an approved record) are the authoritative
        // denominator; a vehicle with none averages to zero, never NaN.
        let (avg_trips_per_day, avg_earnings_per_day) = if worked_days > 0 {
            let days = Decimal::from(worked_days);
            (
                Decimal::from(cumulative_trips) / days,
                cumulative_earnings / days,
            )
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };

        debug!(
            "Aggregated vehicle '{}' over {}: {} trips across {} worked days, earnings {}, rent {}",
            vehicle_id, period, cumulative_trips, worked_days, cumulative_earnings, total_rent
        );

        PeriodTotals {
            cumulative_trips,
            worked_days,
            cumulative_earnings,
            total_rent,
            avg_trips_per_day,
            avg_earnings_per_day,
        }
    }
}
