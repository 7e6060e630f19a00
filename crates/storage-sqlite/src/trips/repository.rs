use diesel::prelude::*;

use crate::db::{execute_write, get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::trip_records;
use crate::schema::trip_records::dsl::*;
use fleetbooks_core::errors::Result;
use fleetbooks_core::periods::Period;
use fleetbooks_core::trips::{TripRecord, TripRecordSourceTrait, TripStatus};

use super::model::TripRecordDB;

pub struct TripRecordRepository {
    pool: DbPool,
}

impl TripRecordRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Bulk insert used by the upstream ingestion glue and by tests. The
    /// engine itself never writes trip records.
    pub async fn insert_records(&self, records: &[TripRecord]) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }
        let rows: Vec<TripRecordDB> = records.iter().cloned().map(TripRecordDB::from).collect();
        execute_write(self.pool.clone(), move |conn| {
            let mut inserted = 0;
            for chunk in rows.chunks(500) {
                inserted += diesel::replace_into(trip_records::table)
                    .values(chunk)
                    .execute(conn)
                    .into_core()?;
            }
            Ok(inserted)
        })
        .await
    }
}

impl TripRecordSourceTrait for TripRecordRepository {
    fn get_approved_records(
        &self,
        for_vehicle: Option<&str>,
        period: &Period,
    ) -> Result<Vec<TripRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = trip_records::table
            .filter(status.eq(TripStatus::Approved.as_str()))
            .filter(trip_date.ge(period.start().format("%Y-%m-%d").to_string()))
            .filter(trip_date.le(period.end().format("%Y-%m-%d").to_string()))
            .order((vehicle_id.asc(), trip_date.asc()))
            .into_boxed();

        if let Some(v) = for_vehicle {
            query = query.filter(vehicle_id.eq(v.to_string()));
        }

        let rows = query.load::<TripRecordDB>(&mut conn).into_core()?;
        Ok(rows.into_iter().map(TripRecord::from).collect())
    }
}
