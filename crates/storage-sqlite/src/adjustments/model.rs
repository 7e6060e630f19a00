//! Database model for manual adjustments.

use std::str::FromStr;

use chrono::Utc;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fleetbooks_core::adjustments::ManualAdjustment;
use fleetbooks_core::constants::DECIMAL_PRECISION;

/// Database row for one vehicle's operator-entered income and expense.
/// Amounts are stored as TEXT to keep exact decimal values.
#[derive(Debug, Clone, Queryable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::manual_adjustments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ManualAdjustmentDB {
    pub vehicle_id: String,
    pub income: String,
    pub expense: String,
    pub updated_at: String,
}

impl From<ManualAdjustmentDB> for ManualAdjustment {
    fn from(db: ManualAdjustmentDB) -> Self {
        Self {
            vehicle_id: db.vehicle_id,
            income: Decimal::from_str(&db.income).unwrap_or_default(),
            expense: Decimal::from_str(&db.expense).unwrap_or_default(),
        }
    }
}

impl From<ManualAdjustment> for ManualAdjustmentDB {
    fn from(domain: ManualAdjustment) -> Self {
        Self {
            vehicle_id: domain.vehicle_id,
            income: domain.income.round_dp(DECIMAL_PRECISION).to_string(),
            expense: domain.expense.round_dp(DECIMAL_PRECISION).to_string(),
            updated_at: Utc::now().to_rfc3339(),
        }
    }
}
