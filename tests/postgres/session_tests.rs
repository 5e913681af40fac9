//! Session queries against the real SQL: ordering, filters and search.

use super::helpers::{BoxError, SeededDatabase, seeded_database};
use margiana::shipment::{
    domain::{ContainerId, LifecycleStatus, Order, ResultLimit, SearchTerm},
    ports::{ContainerFilter, OrderFilter, ShipmentRepository, ShipmentSession},
};
use rstest::rstest;

type TestResult = Result<(), BoxError>;

fn widest() -> Result<ResultLimit, BoxError> {
    Ok(ResultLimit::new(u64::from(ResultLimit::MAX))?)
}

fn numbers(orders: &[Order]) -> Vec<&str> {
    orders.iter().filter_map(Order::order_number).collect()
}

#[rstest]
fn orders_list_newest_first_with_ties_by_id(
    seeded_database: Result<Option<SeededDatabase>, BoxError>,
) -> TestResult {
    let Some(db) = seeded_database? else {
        return Ok(());
    };
    let limit = widest()?;

    let orders = db.runtime.block_on(async {
        let mut session = db.repository.open().await?;
        let listed = session.list_orders(&OrderFilter::All, limit).await;
        session.close();
        listed
    })?;

    assert_eq!(
        numbers(&orders),
        vec![
            "ORD-007", "ORD-005", "ORD-002", "ORD-001", "ORD-003", "ORD-008", "ORD-006",
            "ORD-004"
        ]
    );
    Ok(())
}

#[rstest]
fn listed_orders_carry_their_own_containers(
    seeded_database: Result<Option<SeededDatabase>, BoxError>,
) -> TestResult {
    let Some(db) = seeded_database? else {
        return Ok(());
    };

    let orders = db.runtime.block_on(async {
        let mut session = db.repository.open().await?;
        let listed = session
            .list_orders(&OrderFilter::active(), ResultLimit::ACTIVE_ORDERS)
            .await;
        session.close();
        listed
    })?;

    let container_ids: Vec<(&str, Vec<ContainerId>)> = orders
        .iter()
        .map(|order| {
            (
                order.order_number().unwrap_or_default(),
                order.containers().iter().map(|container| container.id()).collect(),
            )
        })
        .collect();
    assert_eq!(
        container_ids,
        vec![
            ("ORD-005", vec![ContainerId::new(12)]),
            ("ORD-002", vec![]),
            ("ORD-001", vec![ContainerId::new(13)]),
            ("ORD-003", vec![ContainerId::new(10), ContainerId::new(11)]),
            ("ORD-004", vec![ContainerId::new(15)]),
        ]
    );
    let mixed = orders.get(3).ok_or("missing ORD-003")?;
    assert_eq!(mixed.stored_container_count(), 5);
    assert_eq!(mixed.effective_container_count(), 2);
    Ok(())
}

#[rstest]
fn status_counts_match_exact_text_only(
    seeded_database: Result<Option<SeededDatabase>, BoxError>,
) -> TestResult {
    let Some(db) = seeded_database? else {
        return Ok(());
    };

    let (all, active, completed, containers) = db.runtime.block_on(async {
        let mut session = db.repository.open().await?;
        let counts = async {
            Ok::<_, margiana::shipment::ports::ShipmentRepositoryError>((
                session.count_orders(&OrderFilter::All).await?,
                session.count_orders(&OrderFilter::active()).await?,
                session
                    .count_orders(&OrderFilter::status(LifecycleStatus::Completed))
                    .await?,
                session.count_containers().await?,
            ))
        }
        .await;
        session.close();
        counts
    })?;

    assert_eq!((all, active, completed, containers), (8, 5, 2, 6));
    Ok(())
}

#[rstest]
fn containers_filter_on_parent_status_and_driver(
    seeded_database: Result<Option<SeededDatabase>, BoxError>,
) -> TestResult {
    let Some(db) = seeded_database? else {
        return Ok(());
    };
    let filter = ContainerFilter::new()
        .with_order_statuses(LifecycleStatus::in_transit_with_driver().iter().copied())
        .with_driver();
    let limit = widest()?;

    let containers = db.runtime.block_on(async {
        let mut session = db.repository.open().await?;
        let listed = session.list_containers(&filter, limit).await;
        session.close();
        listed
    })?;

    let parents: Vec<(ContainerId, Option<&str>)> = containers
        .iter()
        .map(|container| {
            (
                container.id(),
                container
                    .order()
                    .and_then(|summary| summary.order_number.as_deref()),
            )
        })
        .collect();
    assert_eq!(
        parents,
        vec![
            (ContainerId::new(10), Some("ORD-003")),
            (ContainerId::new(12), Some("ORD-005")),
            (ContainerId::new(15), Some("ORD-004")),
        ]
    );
    Ok(())
}

#[rstest]
fn orphan_containers_keep_no_parent(
    seeded_database: Result<Option<SeededDatabase>, BoxError>,
) -> TestResult {
    let Some(db) = seeded_database? else {
        return Ok(());
    };
    let limit = widest()?;

    let containers = db.runtime.block_on(async {
        let mut session = db.repository.open().await?;
        let listed = session.list_containers(&ContainerFilter::new(), limit).await;
        session.close();
        listed
    })?;

    assert_eq!(containers.len(), 6);
    let orphan = containers
        .iter()
        .find(|container| container.id() == ContainerId::new(14))
        .ok_or("missing orphan container")?;
    assert!(orphan.order().is_none());
    assert!(orphan.driver().has_driver());
    Ok(())
}

#[rstest]
#[case("%", vec!["ORD-008"])]
#[case("n_c", vec!["ORD-008"])]
#[case("o_t", vec![])]
#[case("ASHGABAT", vec!["ORD-001", "ORD-006"])]
#[case("ord-00", vec!["ORD-001", "ORD-002", "ORD-003", "ORD-004", "ORD-005"])]
#[case("ORD-9999", vec![])]
fn search_matches_literal_substrings_ignoring_case(
    seeded_database: Result<Option<SeededDatabase>, BoxError>,
    #[case] raw_term: &str,
    #[case] expected: Vec<&str>,
) -> TestResult {
    let Some(db) = seeded_database? else {
        return Ok(());
    };
    let term = SearchTerm::new(raw_term)?;

    let orders = db.runtime.block_on(async {
        let mut session = db.repository.open().await?;
        let found = session.search_orders(&term, ResultLimit::SEARCH).await;
        session.close();
        found
    })?;

    assert_eq!(numbers(&orders), expected);
    Ok(())
}
