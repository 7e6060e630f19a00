//! Database model for trip records.

use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fleetbooks_core::trips::TripRecord;

/// Database row for one vehicle-day of trips.
#[derive(Debug, Clone, Queryable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::trip_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TripRecordDB {
    pub id: String,
    pub vehicle_id: String,
    pub trip_date: String,
    pub trip_count: i32,
    pub status: String,
    pub created_at: String,
}

impl From<TripRecordDB> for TripRecord {
    fn from(db: TripRecordDB) -> Self {
        Self {
            id: db.id,
            vehicle_id: db.vehicle_id,
            date: NaiveDate::parse_from_str(&db.trip_date, "%Y-%m-%d").unwrap_or_default(),
            trip_count: db.trip_count.max(0) as u32,
            status: db.status.parse().unwrap_or_default(),
        }
    }
}

impl From<TripRecord> for TripRecordDB {
    fn from(domain: TripRecord) -> Self {
        Self {
            id: domain.id,
            vehicle_id: domain.vehicle_id,
            trip_date: domain.date.format("%Y-%m-%d").to_string(),
            trip_count: domain.trip_count as i32,
            status: domain.status.as_str().to_string(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
