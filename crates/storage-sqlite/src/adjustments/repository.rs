use async_trait::async_trait;
use diesel::prelude::*;

use crate::db::{execute_write, get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::manual_adjustments;
use fleetbooks_core::adjustments::{ManualAdjustment, ManualAdjustmentRepositoryTrait};
use fleetbooks_core::errors::Result;

use super::model::ManualAdjustmentDB;

pub struct ManualAdjustmentRepository {
    pool: DbPool,
}

impl ManualAdjustmentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ManualAdjustmentRepositoryTrait for ManualAdjustmentRepository {
    fn get_for_vehicle(&self, for_vehicle: &str) -> Result<Option<ManualAdjustment>> {
        use crate::schema::manual_adjustments::dsl::*;
        let mut conn = get_connection(&self.pool)?;

        let row = manual_adjustments
            .filter(vehicle_id.eq(for_vehicle))
            .first::<ManualAdjustmentDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(row.map(ManualAdjustment::from))
    }

    async fn upsert(&self, adjustment: &ManualAdjustment) -> Result<()> {
        let row = ManualAdjustmentDB::from(adjustment.clone());
        execute_write(self.pool.clone(), move |conn| {
            diesel::replace_into(manual_adjustments::table)
                .values(&row)
                .execute(conn)
                .into_core()?;
            Ok(())
        })
        .await
    }
}
