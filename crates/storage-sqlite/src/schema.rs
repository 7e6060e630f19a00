diesel::table! {
    trip_records (id) {
        id -> Text,
        vehicle_id -> Text,
        trip_date -> Text,
        trip_count -> Integer,
        status -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    vehicle_period_snapshots (vehicle_id, period_start) {
        vehicle_id -> Text,
        period_start -> Text,
        period_end -> Text,
        working_day_multiplier -> Integer,
        updated_at -> Text,
    }
}

diesel::table! {
    adjustment_snapshots (id) {
        id -> Text,
        period_start -> Text,
        period_end -> Text,
        categories -> Text,
        saved_at -> Text,
    }
}

diesel::table! {
    manual_adjustments (vehicle_id) {
        vehicle_id -> Text,
        income -> Text,
        expense -> Text,
        updated_at -> Text,
    }
}

diesel::table! {
    slab_tables (name) {
        name -> Text,
        convention -> Text,
    }
}

diesel::table! {
    slabs (id) {
        id -> Text,
        table_name -> Text,
        min_trips -> Integer,
        max_trips -> Nullable<Integer>,
        rate -> Text,
    }
}

diesel::joinable!(slabs -> slab_tables (table_name));

diesel::allow_tables_to_appear_in_same_query!(
    trip_records,
    vehicle_period_snapshots,
    adjustment_snapshots,
    manual_adjustments,
    slab_tables,
    slabs,
);
