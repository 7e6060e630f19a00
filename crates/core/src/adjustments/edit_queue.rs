//! Write-behind draft for category edits.
//!
//! Operator edits (add, remove, amount change, active toggle) accumulate in
//! an in-memory draft instead of firing a persistence write per interaction.
//! The pending-change count is observable so the UI can show unsaved state;
//! `flush` applies the whole draft as one snapshot write and `discard` is
//! the cancel path. Working-day multiplier edits do not go through this
//! queue; they use the snapshot service's explicit save.

use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::periods::Period;
use crate::snapshots::{AppliedAdjustments, SnapshotServiceTrait};

use super::AdjustmentCategory;

pub struct CategoryEditQueue {
    snapshot_service: Arc<dyn SnapshotServiceTrait>,
    period: Period,
    draft: Vec<AdjustmentCategory>,
    pending: u32,
}

impl CategoryEditQueue {
    /// Opens an editing session seeded with the period's latest applied
    /// category snapshot (empty when none has been applied yet).
    pub fn open(snapshot_service: Arc<dyn SnapshotServiceTrait>, period: Period) -> Result<Self> {
        let draft = snapshot_service.latest_categories(&period)?;
        Ok(CategoryEditQueue {
            snapshot_service,
            period,
            draft,
            pending: 0,
        })
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Current draft, including unflushed edits.
    pub fn draft(&self) -> &[AdjustmentCategory] {
        &self.draft
    }

    /// Number of edits accumulated since the last flush or discard.
    pub fn pending_changes(&self) -> u32 {
        self.pending
    }

    pub fn add_category(&mut self, category: AdjustmentCategory) {
        self.draft.push(category);
        self.pending += 1;
    }

    /// Returns false when no category with the id exists; a miss is not an
    /// edit and does not bump the pending count.
    pub fn remove_category(&mut self, category_id: &str) -> bool {
        let before = self.draft.len();
        self.draft.retain(|c| c.id != category_id);
        let removed = self.draft.len() < before;
        if removed {
            self.pending += 1;
        }
        removed
    }

    pub fn set_amount(&mut self, category_id: &str, amount: Decimal) -> bool {
        match self.draft.iter_mut().find(|c| c.id == category_id) {
            Some(category) => {
                category.amount = amount;
                self.pending += 1;
                true
            }
            None => false,
        }
    }

    pub fn toggle_active(&mut self, category_id: &str) -> bool {
        match self.draft.iter_mut().find(|c| c.id == category_id) {
            Some(category) => {
                category.active = !category.active;
                self.pending += 1;
                true
            }
            None => false,
        }
    }

    /// Applies the draft as a single global-adjustment write and clears the
    /// pending count. On error the draft and count are left intact so the
    /// caller can retry.
    pub async fn flush(&mut self) -> Result<AppliedAdjustments> {
        debug!(
            "Flushing {} pending category edits for period {}",
            self.pending, self.period
        );
        let applied = self
            .snapshot_service
            .apply_global_adjustments(&self.period, self.draft.clone())
            .await?;
        self.pending = 0;
        Ok(applied)
    }

    /// Drops all unflushed edits and reloads the last applied snapshot.
    pub fn discard(&mut self) -> Result<()> {
        self.draft = self.snapshot_service.latest_categories(&self.period)?;
        self.pending = 0;
        Ok(())
    }
}
