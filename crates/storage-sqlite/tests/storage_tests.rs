use chrono::{NaiveDate, TimeZone, Utc};
use diesel::prelude::*;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use fleetbooks_core::adjustments::{
    AdjustmentCategory, AdjustmentKind, AdjustmentSnapshot, ManualAdjustment,
    ManualAdjustmentRepositoryTrait,
};
use fleetbooks_core::errors::{DatabaseError, Error};
use fleetbooks_core::periods::Period;
use fleetbooks_core::slabs::{Slab, SlabConfigSourceTrait, SlabConvention, SlabTable};
use fleetbooks_core::snapshots::{SnapshotRepositoryTrait, VehiclePeriodSnapshot};
use fleetbooks_core::trips::{TripRecord, TripRecordSourceTrait, TripStatus};

use fleetbooks_storage_sqlite::adjustments::ManualAdjustmentRepository;
use fleetbooks_storage_sqlite::db::{create_pool, get_connection, run_migrations, DbPool};
use fleetbooks_storage_sqlite::schema;
use fleetbooks_storage_sqlite::snapshots::AdjustmentSnapshotDB;
use fleetbooks_storage_sqlite::slabs::SlabConfigRepository;
use fleetbooks_storage_sqlite::snapshots::SnapshotRepository;
use fleetbooks_storage_sqlite::trips::TripRecordRepository;

fn setup() -> (TempDir, DbPool) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("fleetbooks_test.db");
    let pool = create_pool(db_path.to_str().unwrap()).unwrap();
    run_migrations(&pool).unwrap();
    (dir, pool)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn trip(id: &str, vehicle: &str, day: NaiveDate, count: u32, status: TripStatus) -> TripRecord {
    TripRecord {
        id: id.to_string(),
        vehicle_id: vehicle.to_string(),
        date: day,
        trip_count: count,
        status,
    }
}

#[tokio::test]
async fn trip_queries_filter_status_period_and_vehicle() {
    let (_dir, pool) = setup();
    let repo = TripRecordRepository::new(pool);

    let records = vec![
        trip("t1", "KA-01", date(2026, 3, 2), 12, TripStatus::Approved),
        trip("t2", "KA-01", date(2026, 3, 5), 9, TripStatus::Pending),
        trip("t3", "KA-01", date(2026, 4, 1), 7, TripStatus::Approved),
        trip("t4", "KA-02", date(2026, 3, 9), 14, TripStatus::Approved),
        trip("t5", "KA-02", date(2026, 3, 10), 6, TripStatus::Rejected),
    ];
    assert_eq!(repo.insert_records(&records).await.unwrap(), 5);

    let march = Period::new(date(2026, 3, 1), date(2026, 3, 31)).unwrap();

    let all = repo.get_approved_records(None, &march).unwrap();
    assert_eq!(
        all.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        vec!["t1", "t4"]
    );

    let one = repo.get_approved_records(Some("KA-02"), &march).unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].trip_count, 14);
}

#[tokio::test]
async fn reinserting_a_trip_record_overwrites_it() {
    let (_dir, pool) = setup();
    let repo = TripRecordRepository::new(pool);
    let march = Period::new(date(2026, 3, 1), date(2026, 3, 31)).unwrap();

    let original = trip("t1", "KA-01", date(2026, 3, 2), 12, TripStatus::Approved);
    repo.insert_records(&[original.clone()]).await.unwrap();

    let corrected = TripRecord {
        trip_count: 15,
        ..original
    };
    repo.insert_records(&[corrected]).await.unwrap();

    let loaded = repo.get_approved_records(Some("KA-01"), &march).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].trip_count, 15);
}

#[tokio::test]
async fn vehicle_snapshot_upsert_overwrites_the_keyed_row() {
    let (_dir, pool) = setup();
    let repo = SnapshotRepository::new(pool);
    let march = Period::new(date(2026, 3, 1), date(2026, 3, 31)).unwrap();

    let snapshot = VehiclePeriodSnapshot {
        vehicle_id: "KA-01".to_string(),
        period_start: date(2026, 3, 1),
        period_end: date(2026, 3, 31),
        working_day_multiplier: 1,
    };
    repo.upsert_vehicle_snapshot(&snapshot).await.unwrap();
    repo.upsert_vehicle_snapshot(&VehiclePeriodSnapshot {
        working_day_multiplier: 3,
        ..snapshot
    })
    .await
    .unwrap();

    let loaded = repo.get_vehicle_snapshot("KA-01", &march).unwrap().unwrap();
    assert_eq!(loaded.working_day_multiplier, 3);

    // Another vehicle's rows never leak in.
    assert!(repo.get_vehicle_snapshot("KA-02", &march).unwrap().is_none());
}

#[tokio::test]
async fn vehicle_ids_are_listed_for_overlapping_periods_only() {
    let (_dir, pool) = setup();
    let repo = SnapshotRepository::new(pool);

    for (vehicle, start, end) in [
        ("KA-01", date(2026, 3, 1), date(2026, 3, 31)),
        ("KA-02", date(2026, 3, 15), date(2026, 4, 15)),
        ("KA-03", date(2026, 5, 1), date(2026, 5, 31)),
    ] {
        repo.upsert_vehicle_snapshot(&VehiclePeriodSnapshot {
            vehicle_id: vehicle.to_string(),
            period_start: start,
            period_end: end,
            working_day_multiplier: 1,
        })
        .await
        .unwrap();
    }

    let march = Period::new(date(2026, 3, 1), date(2026, 3, 31)).unwrap();
    assert_eq!(
        repo.list_vehicle_ids_in_period(&march).unwrap(),
        vec!["KA-01".to_string(), "KA-02".to_string()]
    );
}

#[tokio::test]
async fn latest_adjustment_snapshot_wins_by_saved_at_not_commit_order() {
    let (_dir, pool) = setup();
    let repo = SnapshotRepository::new(pool);
    let march = Period::new(date(2026, 3, 1), date(2026, 3, 31)).unwrap();

    let earlier = AdjustmentSnapshot {
        period_start: date(2026, 3, 1),
        period_end: date(2026, 3, 31),
        categories: vec![AdjustmentCategory::new(
            "Parking",
            AdjustmentKind::Expense,
            dec!(50),
        )],
        saved_at: Utc.with_ymd_and_hms(2026, 3, 31, 10, 0, 0).unwrap(),
    };
    let later = AdjustmentSnapshot {
        categories: vec![AdjustmentCategory::new(
            "Festival bonus",
            AdjustmentKind::Income,
            dec!(200),
        )],
        saved_at: Utc.with_ymd_and_hms(2026, 3, 31, 10, 0, 5).unwrap(),
        ..earlier.clone()
    };

    // Commit in reverse chronological order; the read side still picks the
    // version with the greatest saved_at.
    repo.save_adjustment_snapshot(&later).await.unwrap();
    repo.save_adjustment_snapshot(&earlier).await.unwrap();

    let winner = repo
        .get_latest_adjustment_snapshot(&march)
        .unwrap()
        .unwrap();
    assert_eq!(winner.categories.len(), 1);
    assert_eq!(winner.categories[0].name, "Festival bonus");
    assert_eq!(winner.income_sum(), dec!(200));
}

#[tokio::test]
async fn adjustment_snapshot_categories_round_trip_exactly() {
    let (_dir, pool) = setup();
    let repo = SnapshotRepository::new(pool);
    let march = Period::new(date(2026, 3, 1), date(2026, 3, 31)).unwrap();

    let mut inactive = AdjustmentCategory::new("Repairs", AdjustmentKind::Expense, dec!(120.50));
    inactive.active = false;
    let snapshot = AdjustmentSnapshot {
        period_start: date(2026, 3, 1),
        period_end: date(2026, 3, 31),
        categories: vec![
            AdjustmentCategory::new("Incentive", AdjustmentKind::Income, dec!(500)),
            inactive,
        ],
        saved_at: Utc.with_ymd_and_hms(2026, 3, 31, 12, 0, 0).unwrap(),
    };
    repo.save_adjustment_snapshot(&snapshot).await.unwrap();

    let loaded = repo
        .get_latest_adjustment_snapshot(&march)
        .unwrap()
        .unwrap();
    assert_eq!(loaded.categories, snapshot.categories);
    assert_eq!(loaded.expense_sum(), dec!(0));
}

#[tokio::test]
async fn corrupt_saved_at_surfaces_as_error_not_winner() {
    let (_dir, pool) = setup();
    let repo = SnapshotRepository::new(pool.clone());
    let march = Period::new(date(2026, 3, 1), date(2026, 3, 31)).unwrap();

    let corrupt = AdjustmentSnapshotDB {
        id: "corrupt-row".to_string(),
        period_start: "2026-03-01".to_string(),
        period_end: "2026-03-31".to_string(),
        categories: "[]".to_string(),
        saved_at: "not-a-timestamp".to_string(),
    };
    let mut conn = get_connection(&pool).unwrap();
    diesel::insert_into(schema::adjustment_snapshots::table)
        .values(&corrupt)
        .execute(&mut conn)
        .unwrap();

    match repo.get_latest_adjustment_snapshot(&march) {
        Err(Error::Database(DatabaseError::Internal(message))) => {
            assert!(message.contains("saved_at"), "unexpected message: {}", message);
        }
        other => panic!("expected an internal database error, got {:?}", other),
    }
}

#[tokio::test]
async fn manual_adjustment_upsert_and_read_back() {
    let (_dir, pool) = setup();
    let repo = ManualAdjustmentRepository::new(pool);

    assert!(repo.get_for_vehicle("KA-01").unwrap().is_none());

    let entry = ManualAdjustment {
        vehicle_id: "KA-01".to_string(),
        income: dec!(350.25),
        expense: dec!(80),
    };
    repo.upsert(&entry).await.unwrap();
    assert_eq!(repo.get_for_vehicle("KA-01").unwrap().unwrap(), entry);

    let revised = ManualAdjustment {
        income: dec!(400),
        ..entry
    };
    repo.upsert(&revised).await.unwrap();
    assert_eq!(repo.get_for_vehicle("KA-01").unwrap().unwrap(), revised);
}

#[tokio::test]
async fn persisted_decimals_round_to_ledger_precision() {
    let (_dir, pool) = setup();
    let repo = ManualAdjustmentRepository::new(pool);

    let entry = ManualAdjustment {
        vehicle_id: "KA-01".to_string(),
        income: dec!(1.23456789),
        expense: dec!(0.0000004),
    };
    repo.upsert(&entry).await.unwrap();

    let loaded = repo.get_for_vehicle("KA-01").unwrap().unwrap();
    assert_eq!(loaded.income, dec!(1.234568));
    assert_eq!(loaded.expense, dec!(0));
}

#[tokio::test]
async fn slab_table_round_trips_through_validation() {
    let (_dir, pool) = setup();
    let repo = SlabConfigRepository::new(pool);

    let table = SlabTable::new(
        "rent",
        SlabConvention::Ascending,
        vec![
            Slab {
                min_trips: 0,
                max_trips: Some(100),
                rate: dec!(0),
            },
            Slab {
                min_trips: 100,
                max_trips: Some(200),
                rate: dec!(145),
            },
            Slab {
                min_trips: 200,
                max_trips: None,
                rate: dec!(290),
            },
        ],
    )
    .unwrap();
    repo.save_table(&table).await.unwrap();

    let loaded = repo.load("rent").unwrap();
    assert_eq!(loaded, table);
    assert_eq!(loaded.into_resolver().resolve(210), dec!(290));
}

#[tokio::test]
async fn saving_a_slab_table_replaces_previous_tiers() {
    let (_dir, pool) = setup();
    let repo = SlabConfigRepository::new(pool);

    let first = SlabTable::new(
        "earnings",
        SlabConvention::Descending,
        vec![
            Slab {
                min_trips: 0,
                max_trips: None,
                rate: dec!(1),
            },
            Slab {
                min_trips: 500,
                max_trips: None,
                rate: dec!(2),
            },
        ],
    )
    .unwrap();
    repo.save_table(&first).await.unwrap();

    let second = SlabTable::new(
        "earnings",
        SlabConvention::Descending,
        vec![Slab {
            min_trips: 0,
            max_trips: None,
            rate: dec!(3),
        }],
    )
    .unwrap();
    repo.save_table(&second).await.unwrap();

    let loaded = repo.load("earnings").unwrap();
    assert_eq!(loaded.slabs().len(), 1);
    assert_eq!(loaded.into_resolver().resolve(999), dec!(3));
}

#[tokio::test]
async fn loading_a_missing_slab_table_is_not_found() {
    let (_dir, pool) = setup();
    let repo = SlabConfigRepository::new(pool);

    match repo.load("no-such-table") {
        Err(Error::Database(DatabaseError::NotFound(_))) => {}
        other => panic!("expected NotFound, got {:?}", other),
    }
}
