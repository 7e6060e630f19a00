use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Period totals from the external transaction-history ledger, already
/// netted. Read-only input to the adjustment ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub vehicle_id: String,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net: Decimal,
}

impl TransactionSummary {
    /// The degraded-row default: a summary that contributes nothing when the
    /// external fetch for a vehicle failed.
    pub fn zero(vehicle_id: impl Into<String>) -> Self {
        TransactionSummary {
            vehicle_id: vehicle_id.into(),
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
            net: Decimal::ZERO,
        }
    }
}
