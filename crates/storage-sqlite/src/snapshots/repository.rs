use async_trait::async_trait;
use diesel::prelude::*;

use crate::db::{execute_write, get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::{adjustment_snapshots, vehicle_period_snapshots};
use fleetbooks_core::adjustments::AdjustmentSnapshot;
use fleetbooks_core::errors::Result;
use fleetbooks_core::periods::Period;
use fleetbooks_core::snapshots::{SnapshotRepositoryTrait, VehiclePeriodSnapshot};

use super::model::{AdjustmentSnapshotDB, VehiclePeriodSnapshotDB};

pub struct SnapshotRepository {
    pool: DbPool,
}

impl SnapshotRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn date_bound(date: chrono::NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for SnapshotRepository {
    async fn upsert_vehicle_snapshot(&self, snapshot: &VehiclePeriodSnapshot) -> Result<()> {
        let row = VehiclePeriodSnapshotDB::from(snapshot.clone());
        execute_write(self.pool.clone(), move |conn| {
            diesel::replace_into(vehicle_period_snapshots::table)
                .values(&row)
                .execute(conn)
                .into_core()?;
            Ok(())
        })
        .await
    }

    fn get_vehicle_snapshot(
        &self,
        for_vehicle: &str,
        period: &Period,
    ) -> Result<Option<VehiclePeriodSnapshot>> {
        use crate::schema::vehicle_period_snapshots::dsl::*;
        let mut conn = get_connection(&self.pool)?;

        // Overlap on TEXT dates works because the column format is
        // lexicographically ordered (%Y-%m-%d).
        let row = vehicle_period_snapshots
            .filter(vehicle_id.eq(for_vehicle))
            .filter(period_start.le(Self::date_bound(period.end())))
            .filter(period_end.ge(Self::date_bound(period.start())))
            .order(period_start.desc())
            .first::<VehiclePeriodSnapshotDB>(&mut conn)
            .optional()
            .into_core()?;

        row.map(VehiclePeriodSnapshot::try_from).transpose()
    }

    fn list_vehicle_ids_in_period(&self, period: &Period) -> Result<Vec<String>> {
        use crate::schema::vehicle_period_snapshots::dsl::*;
        let mut conn = get_connection(&self.pool)?;

        let ids = vehicle_period_snapshots
            .filter(period_start.le(Self::date_bound(period.end())))
            .filter(period_end.ge(Self::date_bound(period.start())))
            .select(vehicle_id)
            .distinct()
            .order(vehicle_id.asc())
            .load::<String>(&mut conn)
            .into_core()?;

        Ok(ids)
    }

    async fn save_adjustment_snapshot(&self, snapshot: &AdjustmentSnapshot) -> Result<()> {
        let row = AdjustmentSnapshotDB::from(snapshot.clone());
        execute_write(self.pool.clone(), move |conn| {
            diesel::insert_into(adjustment_snapshots::table)
                .values(&row)
                .execute(conn)
                .into_core()?;
            Ok(())
        })
        .await
    }

    fn get_latest_adjustment_snapshot(
        &self,
        period: &Period,
    ) -> Result<Option<AdjustmentSnapshot>> {
        use crate::schema::adjustment_snapshots::dsl::*;
        let mut conn = get_connection(&self.pool)?;

        let rows = adjustment_snapshots
            .filter(period_start.le(Self::date_bound(period.end())))
            .filter(period_end.ge(Self::date_bound(period.start())))
            .load::<AdjustmentSnapshotDB>(&mut conn)
            .into_core()?;

        // The winner is decided on the parsed timestamp, not the TEXT
        // column, so differing fractional-second precision cannot skew it.
        // A row that fails to parse is a store defect and surfaces as an
        // error rather than competing with a defaulted timestamp.
        let snapshots = rows
            .into_iter()
            .map(AdjustmentSnapshot::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(snapshots.into_iter().max_by_key(|s| s.saved_at))
    }
}
