use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether an adjustment line adds to or subtracts from profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentKind {
    Income,
    Expense,
}

/// A named, toggleable income or expense line applied uniformly across all
/// vehicles in a period. Mutated by an admin operator through the edit
/// queue; inactive categories stay configured but contribute nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentCategory {
    pub id: String,
    pub name: String,
    pub kind: AdjustmentKind,
    pub amount: Decimal,
    pub active: bool,
}

impl AdjustmentCategory {
    pub fn new(name: impl Into<String>, kind: AdjustmentKind, amount: Decimal) -> Self {
        AdjustmentCategory {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            kind,
            amount,
            active: true,
        }
    }
}

/// Operator-entered scalar adjustment for one vehicle, independent of
/// period boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualAdjustment {
    pub vehicle_id: String,
    pub income: Decimal,
    pub expense: Decimal,
}

impl ManualAdjustment {
    pub fn zero(vehicle_id: impl Into<String>) -> Self {
        ManualAdjustment {
            vehicle_id: vehicle_id.into(),
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        }
    }
}

/// The canonical, timestamped category set in effect for a period. One
/// snapshot version is written per apply; loads resolve the version with
/// the greatest `saved_at` overlapping the requested period, so the later
/// of two racing writes wins regardless of commit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentSnapshot {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub categories: Vec<AdjustmentCategory>,
    pub saved_at: DateTime<Utc>,
}

impl AdjustmentSnapshot {
    /// Sum of active income category amounts.
    pub fn income_sum(&self) -> Decimal {
        sum_active(&self.categories, AdjustmentKind::Income)
    }

    /// Sum of active expense category amounts.
    pub fn expense_sum(&self) -> Decimal {
        sum_active(&self.categories, AdjustmentKind::Expense)
    }
}

pub(crate) fn sum_active(categories: &[AdjustmentCategory], kind: AdjustmentKind) -> Decimal {
    categories
        .iter()
        .filter(|c| c.active && c.kind == kind)
        .map(|c| c.amount)
        .sum()
}
