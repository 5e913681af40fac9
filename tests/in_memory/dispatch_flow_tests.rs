//! End-to-end command handling against the in-memory repository.

use super::helpers::{dispatcher_over, repo, runtime, store_driver, store_order};
use margiana::{
    dispatch::{CommandEvent, DATABASE_UNAVAILABLE},
    shipment::{
        adapters::memory::{FailureMode, InMemoryShipmentRepository},
        domain::{OrderId, OrderStatus, PersistedOrderData},
    },
};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[rstest]
fn a_session_of_commands_answers_each_in_turn(
    runtime: io::Result<Runtime>,
    repo: InMemoryShipmentRepository,
) -> TestResult {
    let rt = runtime?;
    store_order(&repo, 1, "In Transit CHN-IR", None)?;
    store_order(&repo, 2, "Completed", None)?;
    store_driver(&repo, 10, 1, "Ahmad", "Karimi")?;
    let dispatcher = dispatcher_over(&repo)?;

    let events = ["/status", "/drivers", "/search ORD-002"]
        .into_iter()
        .map(CommandEvent::parse)
        .collect::<Result<Vec<_>, _>>()?;
    let replies = rt.block_on(dispatcher.handle_all(events));

    assert_eq!(replies.len(), 3);
    let status = replies.first().ok_or("missing status reply")?;
    assert!(status.contains("🚢 By sea: 1"));
    assert!(status.ends_with("*Completed:* ✅ 1"));
    let drivers = replies.get(1).ok_or("missing drivers reply")?;
    assert!(drivers.contains("👤 *Ahmad Karimi*"));
    assert!(drivers.contains("📦 Order: ORD-001"));
    let search = replies.get(2).ok_or("missing search reply")?;
    assert!(search.contains("✅ *ORD-002*"));
    assert_eq!(repo.sessions_opened(), 3);
    assert_eq!(repo.sessions_outstanding(), 0);
    Ok(())
}

#[rstest]
fn recovery_after_an_outage_needs_no_restart(
    runtime: io::Result<Runtime>,
    repo: InMemoryShipmentRepository,
) -> TestResult {
    let rt = runtime?;
    store_order(&repo, 1, "New", None)?;
    let dispatcher = dispatcher_over(&repo)?;

    repo.set_failure_mode(FailureMode::Unavailable)?;
    let during = rt.block_on(dispatcher.handle_line("/report"));
    repo.set_failure_mode(FailureMode::None)?;
    let after = rt.block_on(dispatcher.handle_line("/report"));

    assert_eq!(during, DATABASE_UNAVAILABLE);
    assert!(after.contains("*Active:* 1"));
    Ok(())
}

#[rstest]
fn order_in_china_without_containers_shows_its_stored_count(
    runtime: io::Result<Runtime>,
    repo: InMemoryShipmentRepository,
) -> TestResult {
    let rt = runtime?;
    repo.insert_order(
        PersistedOrderData::new(
            OrderId::new(1),
            "ORD-001",
            OrderStatus::from_stored("In Progress CHN"),
        )
        .with_container_count(2),
    )?;
    let dispatcher = dispatcher_over(&repo)?;

    let reply = rt.block_on(dispatcher.handle_line("/orders"));

    assert!(reply.contains("🇨🇳 *ORD-001*"));
    assert!(reply.contains("🚛 2 cont. | —"));
    Ok(())
}
