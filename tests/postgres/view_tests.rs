//! Projector views and command replies over the Postgres adapter.

use super::helpers::{BoxError, SeededDatabase, seeded_database};
use margiana::{
    dispatch::{CommandDispatcher, DATABASE_UNAVAILABLE},
    shipment::{
        adapters::postgres::{PostgresShipmentRepository, lazy_pool},
        domain::ResultLimit,
        render::ViewRenderer,
        services::{MISSING, NOTES_PREVIEW_CHARS, QueryProjector},
    },
};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;

type TestResult = Result<(), BoxError>;

#[rstest]
fn summary_counts_unrecognised_orders_in_the_total_only(
    seeded_database: Result<Option<SeededDatabase>, BoxError>,
) -> TestResult {
    let Some(db) = seeded_database? else {
        return Ok(());
    };
    let projector = db.projector();

    let report = db.runtime.block_on(projector.summary_report())?;

    assert_eq!(report.total_orders, 8);
    assert_eq!(report.active_count, 5);
    assert_eq!(report.total_containers, 6);
    let counts: Vec<u64> = report.per_status.iter().map(|entry| entry.count).collect();
    assert_eq!(counts, vec![1, 1, 1, 1, 1, 2]);
    Ok(())
}

#[rstest]
fn active_orders_use_related_rows_before_the_stored_count(
    seeded_database: Result<Option<SeededDatabase>, BoxError>,
) -> TestResult {
    let Some(db) = seeded_database? else {
        return Ok(());
    };
    let projector = db.projector();

    let records = db
        .runtime
        .block_on(projector.active_orders(ResultLimit::ACTIVE_ORDERS))?;

    let rows: Vec<(&str, u64)> = records
        .iter()
        .map(|record| (record.order_number.as_str(), record.container_count))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("ORD-005", 1),
            ("ORD-002", 1),
            ("ORD-001", 1),
            ("ORD-003", 2),
            ("ORD-004", 1),
        ]
    );
    Ok(())
}

#[rstest]
fn drivers_on_the_road_come_with_their_order(
    seeded_database: Result<Option<SeededDatabase>, BoxError>,
) -> TestResult {
    let Some(db) = seeded_database? else {
        return Ok(());
    };
    let projector = db.projector();

    let records = db
        .runtime
        .block_on(projector.drivers_in_transit(ResultLimit::DRIVERS_IN_TRANSIT))?;

    let names: Vec<&str> = records
        .iter()
        .map(|record| record.driver_name.as_str())
        .collect();
    assert_eq!(names, vec!["Ahmad Karimi", "Orazov", "Reza"]);
    let full = records.first().ok_or("missing first driver")?;
    assert_eq!(full.order_number, "ORD-003");
    assert_eq!(full.delivery_date, "07.04");
    let sparse = records.get(2).ok_or("missing third driver")?;
    assert_eq!(sparse.truck_number, MISSING);
    Ok(())
}

#[rstest]
fn lane_status_counts_each_section(
    seeded_database: Result<Option<SeededDatabase>, BoxError>,
) -> TestResult {
    let Some(db) = seeded_database? else {
        return Ok(());
    };
    let projector = db.projector();

    let lanes = db.runtime.block_on(projector.lane_status())?;

    let counts: Vec<Vec<u64>> = lanes
        .sections
        .iter()
        .map(|section| section.counts.iter().map(|entry| entry.count).collect())
        .collect();
    assert_eq!(counts, vec![vec![1, 1], vec![1], vec![1, 1]]);
    assert_eq!(lanes.completed, 2);
    Ok(())
}

#[rstest]
fn search_hits_cut_notes_and_clamp_negative_counts(
    seeded_database: Result<Option<SeededDatabase>, BoxError>,
) -> TestResult {
    let Some(db) = seeded_database? else {
        return Ok(());
    };
    let projector = db.projector();

    let textiles = db
        .runtime
        .block_on(projector.search("  ashgabat ", ResultLimit::SEARCH))?;
    let wildcards = db
        .runtime
        .block_on(projector.search("cotton_co", ResultLimit::SEARCH))?;

    let completed = textiles.get(1).ok_or("missing ORD-006")?;
    assert_eq!(completed.order_number, "ORD-006");
    assert_eq!(completed.notes.chars().count(), NOTES_PREVIEW_CHARS);
    let odd = wildcards.first().ok_or("missing ORD-008")?;
    assert_eq!(odd.container_count, 0);
    assert_eq!(odd.notes, MISSING);
    Ok(())
}

#[rstest]
fn raw_search_words_reach_the_database(
    seeded_database: Result<Option<SeededDatabase>, BoxError>,
) -> TestResult {
    let Some(db) = seeded_database? else {
        return Ok(());
    };
    let dispatcher = db.dispatcher()?;

    let reply = db.runtime.block_on(dispatcher.handle_line("/search 100% Cotton"));

    assert!(reply.starts_with("🔍 *RESULTS:* '100% Cotton'"));
    assert!(reply.contains("*ORD-008*"));
    Ok(())
}

#[rstest]
fn unreachable_server_is_reported_as_unavailable() -> TestResult {
    let runtime = super::helpers::test_runtime()?;
    let pool = lazy_pool(
        "postgres://desk@127.0.0.1:1/logistics",
        1,
        Duration::from_millis(200),
    );
    let projector = QueryProjector::new(
        Arc::new(PostgresShipmentRepository::new(pool)),
        Arc::new(DefaultClock),
    );
    let dispatcher = CommandDispatcher::new(projector, ViewRenderer::new()?);

    let reply = runtime.block_on(dispatcher.handle_line("/report"));

    assert_eq!(reply, DATABASE_UNAVAILABLE);
    Ok(())
}
