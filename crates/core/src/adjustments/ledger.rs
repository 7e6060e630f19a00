//! The three-layer profit/loss ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregation::PeriodTotals;
use crate::transactions::TransactionSummary;

use super::adjustments_model::{sum_active, AdjustmentCategory, AdjustmentKind, ManualAdjustment};

/// Sign of the final figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceStatus {
    Profit,
    Loss,
    BreakEven,
}

impl PerformanceStatus {
    pub fn from_amount(amount: Decimal) -> Self {
        if amount > Decimal::ZERO {
            PerformanceStatus::Profit
        } else if amount < Decimal::ZERO {
            PerformanceStatus::Loss
        } else {
            PerformanceStatus::BreakEven
        }
    }
}

/// Profit/loss with the per-layer figures it was assembled from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLossBreakdown {
    pub profit_loss: Decimal,
    pub status: PerformanceStatus,
    pub manual_income: Decimal,
    pub manual_expense: Decimal,
    pub category_income: Decimal,
    pub category_expense: Decimal,
    pub transaction_net: Decimal,
}

/// Merges the three adjustment layers with the period totals:
/// manual per-vehicle entries, active global categories, and the external
/// transaction-history net (already netted upstream).
///
/// `profit_loss = earnings + manual.income + category income + txn.net
///              - rent - manual.expense - category expense`
pub fn compute_profit_loss(
    totals: &PeriodTotals,
    manual: &ManualAdjustment,
    categories: &[AdjustmentCategory],
    transaction: &TransactionSummary,
) -> ProfitLossBreakdown {
    let category_income = sum_active(categories, AdjustmentKind::Income);
    let category_expense = sum_active(categories, AdjustmentKind::Expense);

    let profit_loss = totals.cumulative_earnings + manual.income + category_income
        + transaction.net
        - totals.total_rent
        - manual.expense
        - category_expense;

    ProfitLossBreakdown {
        profit_loss,
        status: PerformanceStatus::from_amount(profit_loss),
        manual_income: manual.income,
        manual_expense: manual.expense,
        category_income,
        category_expense,
        transaction_net: transaction.net,
    }
}
