//! Given steps for operator query BDD scenarios.

use super::world::DeskWorld;
use eyre::WrapErr;
use margiana::shipment::{
    adapters::memory::FailureMode,
    domain::{
        ContainerId, DriverAssignment, OrderId, OrderStatus, PersistedContainerData,
        PersistedOrderData,
    },
};
use rstest_bdd_macros::given;

#[given(r#"an order "{number}" for "{client}" in status "{status}""#)]
fn an_order(
    world: &mut DeskWorld,
    number: String,
    client: String,
    status: String,
) -> Result<(), eyre::Report> {
    let id = world.allocate_id();
    world
        .repository
        .insert_order(
            PersistedOrderData::new(
                OrderId::new(id),
                number.clone(),
                OrderStatus::from_stored(&status),
            )
            .with_client_name(client),
        )
        .wrap_err("insert scenario order")?;
    world.order_ids.insert(number, id);
    Ok(())
}

#[given(r#"container "{container}" on order "{number}" driven by "{first}" "{last}""#)]
fn a_container_with_driver(
    world: &mut DeskWorld,
    container: String,
    number: String,
    first: String,
    last: String,
) -> Result<(), eyre::Report> {
    let order_id = *world
        .order_ids
        .get(&number)
        .ok_or_else(|| eyre::eyre!("order {number} was not declared in the scenario"))?;
    let id = world.allocate_id();
    world
        .repository
        .insert_container(
            PersistedContainerData::new(ContainerId::new(id), Some(OrderId::new(order_id)))
                .with_container_number(container)
                .with_driver(DriverAssignment::named(first, last)),
        )
        .wrap_err("insert scenario container")?;
    Ok(())
}

#[given("the database is unavailable")]
fn database_unavailable(world: &mut DeskWorld) -> Result<(), eyre::Report> {
    world
        .repository
        .set_failure_mode(FailureMode::Unavailable)
        .wrap_err("switch repository to unavailable")?;
    Ok(())
}

#[given("every query fails")]
fn every_query_fails(world: &mut DeskWorld) -> Result<(), eyre::Report> {
    world
        .repository
        .set_failure_mode(FailureMode::QueryFailure)
        .wrap_err("switch repository to failing queries")?;
    Ok(())
}
