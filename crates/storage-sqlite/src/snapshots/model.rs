//! Database models for snapshot rows.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleetbooks_core::adjustments::AdjustmentSnapshot;
use fleetbooks_core::errors::{DatabaseError, Error};
use fleetbooks_core::snapshots::VehiclePeriodSnapshot;

fn parse_stored_date(column: &str, raw: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        Error::Database(DatabaseError::Internal(format!(
            "corrupt {} '{}': {}",
            column, raw, e
        )))
    })
}

/// Row keyed by (vehicle_id, period_start); carries the vehicle-local
/// working-day multiplier.
#[derive(Debug, Clone, Queryable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::vehicle_period_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct VehiclePeriodSnapshotDB {
    pub vehicle_id: String,
    pub period_start: String,
    pub period_end: String,
    pub working_day_multiplier: i32,
    pub updated_at: String,
}

impl TryFrom<VehiclePeriodSnapshotDB> for VehiclePeriodSnapshot {
    type Error = Error;

    fn try_from(db: VehiclePeriodSnapshotDB) -> Result<Self, Error> {
        Ok(Self {
            period_start: parse_stored_date("period_start", &db.period_start)?,
            period_end: parse_stored_date("period_end", &db.period_end)?,
            vehicle_id: db.vehicle_id,
            working_day_multiplier: db.working_day_multiplier.max(1) as u32,
        })
    }
}

impl From<VehiclePeriodSnapshot> for VehiclePeriodSnapshotDB {
    fn from(domain: VehiclePeriodSnapshot) -> Self {
        Self {
            vehicle_id: domain.vehicle_id,
            period_start: domain.period_start.format("%Y-%m-%d").to_string(),
            period_end: domain.period_end.format("%Y-%m-%d").to_string(),
            working_day_multiplier: domain.working_day_multiplier as i32,
            updated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// One appended adjustment-snapshot version. The categories travel as a
/// JSON document; `saved_at` decides the winner at read time, so a row
/// whose timestamp cannot be parsed is an error, never a default that
/// could outrank genuine versions.
#[derive(Debug, Clone, Queryable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::adjustment_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentSnapshotDB {
    pub id: String,
    pub period_start: String,
    pub period_end: String,
    pub categories: String,
    pub saved_at: String,
}

impl TryFrom<AdjustmentSnapshotDB> for AdjustmentSnapshot {
    type Error = Error;

    fn try_from(db: AdjustmentSnapshotDB) -> Result<Self, Error> {
        let saved_at = DateTime::parse_from_rfc3339(&db.saved_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                Error::Database(DatabaseError::Internal(format!(
                    "corrupt saved_at '{}' on snapshot '{}': {}",
                    db.saved_at, db.id, e
                )))
            })?;
        let categories = serde_json::from_str(&db.categories).map_err(|e| {
            Error::Database(DatabaseError::Internal(format!(
                "corrupt categories on snapshot '{}': {}",
                db.id, e
            )))
        })?;

        Ok(Self {
            period_start: parse_stored_date("period_start", &db.period_start)?,
            period_end: parse_stored_date("period_end", &db.period_end)?,
            categories,
            saved_at,
        })
    }
}

impl From<AdjustmentSnapshot> for AdjustmentSnapshotDB {
    fn from(domain: AdjustmentSnapshot) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            period_start: domain.period_start.format("%Y-%m-%d").to_string(),
            period_end: domain.period_end.format("%Y-%m-%d").to_string(),
            categories: serde_json::to_string(&domain.categories)
                .unwrap_or_else(|_| "[]".to_string()),
            saved_at: domain.saved_at.to_rfc3339(),
        }
    }
}
