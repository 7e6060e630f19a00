//! Database models for slab configuration.

use std::str::FromStr;

use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleetbooks_core::constants::DECIMAL_PRECISION;
use fleetbooks_core::slabs::{Slab, SlabConvention};

/// Header row naming a table and its resolution convention.
#[derive(Debug, Clone, Queryable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::slab_tables)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SlabTableDB {
    pub name: String,
    pub convention: String,
}

impl SlabTableDB {
    /// An unknown convention string is a configuration defect, reported by
    /// the repository rather than defaulted here.
    pub fn parse_convention(&self) -> Option<SlabConvention> {
        match self.convention.as_str() {
            "ascending" => Some(SlabConvention::Ascending),
            "descending" => Some(SlabConvention::Descending),
            _ => None,
        }
    }
}

/// One tier row belonging to a slab table.
#[derive(Debug, Clone, Queryable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::slabs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SlabRowDB {
    pub id: String,
    pub table_name: String,
    pub min_trips: i32,
    pub max_trips: Option<i32>,
    pub rate: String,
}

impl SlabRowDB {
    pub fn new(table_name: &str, slab: &Slab) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            table_name: table_name.to_string(),
            min_trips: slab.min_trips as i32,
            max_trips: slab.max_trips.map(|m| m as i32),
            rate: slab.rate.round_dp(DECIMAL_PRECISION).to_string(),
        }
    }
}

impl From<SlabRowDB> for Slab {
    fn from(db: SlabRowDB) -> Self {
        Self {
            min_trips: db.min_trips.max(0) as u32,
            max_trips: db.max_trips.map(|m| m.max(0) as u32),
            rate: Decimal::from_str(&db.rate).unwrap_or_default(),
        }
    }
}
