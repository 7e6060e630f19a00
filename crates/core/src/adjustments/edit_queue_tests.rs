//! Unit tests for the category edit queue (draft / flush / discard).

use super::*;
use crate::periods::Period;
use crate::snapshots::snapshot_service_tests::InMemorySnapshotRepository;
use crate::snapshots::{SnapshotService, SnapshotServiceTrait};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn january() -> Period {
    Period::new(
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
    )
    .unwrap()
}

fn snapshot_service() -> Arc<dyn SnapshotServiceTrait> {
    Arc::new(SnapshotService::new(Arc::new(
        InMemorySnapshotRepository::default(),
    )))
}

#[tokio::test]
async fn test_edits_accumulate_without_writes() {
    let service = snapshot_service();
    let mut queue = CategoryEditQueue::open(service.clone(), january()).unwrap();

    let category = AdjustmentCategory::new("tolls", AdjustmentKind::Expense, dec!(50));
    let id = category.id.clone();
    queue.add_category(category);
    queue.set_amount(&id, dec!(75));
    queue.toggle_active(&id);

    assert_eq!(queue.pending_changes(), 3);
    // Nothing applied yet: a fresh load still sees no categories.
    assert!(service.latest_categories(&january()).unwrap().is_empty());
}

#[tokio::test]
async fn test_flush_applies_draft_once_and_resets_count() {
    let service = snapshot_service();
    let mut queue = CategoryEditQueue::open(service.clone(), january()).unwrap();

    queue.add_category(AdjustmentCategory::new(
        "washing",
        AdjustmentKind::Expense,
        dec!(30),
    ));
    queue.add_category(AdjustmentCategory::new(
        "bonus",
        AdjustmentKind::Income,
        dec!(120),
    ));
    assert_eq!(queue.pending_changes(), 2);

    queue.flush().await.unwrap();
    assert_eq!(queue.pending_changes(), 0);

    let applied = service.latest_categories(&january()).unwrap();
    assert_eq!(applied.len(), 2);
}

#[tokio::test]
async fn test_discard_restores_last_applied_snapshot() {
    let service = snapshot_service();
    let mut queue = CategoryEditQueue::open(service.clone(), january()).unwrap();

    queue.add_category(AdjustmentCategory::new(
        "tolls",
        AdjustmentKind::Expense,
        dec!(50),
    ));
    queue.flush().await.unwrap();

    // Draft a second round of edits, then cancel them.
    let id = queue.draft()[0].id.clone();
    queue.set_amount(&id, dec!(999));
    queue.add_category(AdjustmentCategory::new(
        "scrapped",
        AdjustmentKind::Income,
        dec!(1),
    ));
    assert_eq!(queue.pending_changes(), 2);

    queue.discard().unwrap();
    assert_eq!(queue.pending_changes(), 0);
    assert_eq!(queue.draft().len(), 1);
    assert_eq!(queue.draft()[0].amount, dec!(50));
}

#[tokio::test]
async fn test_missing_category_edits_do_not_count() {
    let service = snapshot_service();
    let mut queue = CategoryEditQueue::open(service, january()).unwrap();

    assert!(!queue.set_amount("no-such-id", dec!(10)));
    assert!(!queue.toggle_active("no-such-id"));
    assert!(!queue.remove_category("no-such-id"));
    assert_eq!(queue.pending_changes(), 0);
}

#[tokio::test]
async fn test_remove_category_counts_as_edit() {
    let service = snapshot_service();
    let mut queue = CategoryEditQueue::open(service, january()).unwrap();

    let category = AdjustmentCategory::new("tolls", AdjustmentKind::Expense, dec!(50));
    let id = category.id.clone();
    queue.add_category(category);
    assert!(queue.remove_category(&id));
    assert_eq!(queue.pending_changes(), 2);
    assert!(queue.draft().is_empty());
}
