//! Shared world state for operator query BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use margiana::{
    dispatch::CommandDispatcher,
    shipment::{
        adapters::memory::InMemoryShipmentRepository, render::ViewRenderer,
        services::QueryProjector,
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Dispatcher type used by the BDD world.
pub type TestDispatcher = CommandDispatcher<InMemoryShipmentRepository, DefaultClock>;

/// Scenario world for operator query behaviour tests.
pub struct DeskWorld {
    pub repository: InMemoryShipmentRepository,
    pub dispatcher: TestDispatcher,
    pub order_ids: HashMap<String, i32>,
    pub next_id: i32,
    pub last_reply: Option<String>,
}

impl DeskWorld {
    /// Creates a world over an empty repository.
    ///
    /// # Panics
    ///
    /// Panics if the built-in templates fail to compile.
    #[must_use]
    pub fn new() -> Self {
        let repository = InMemoryShipmentRepository::new();
        let projector =
            QueryProjector::new(Arc::new(repository.clone()), Arc::new(DefaultClock));
        let renderer = ViewRenderer::new().expect("built-in templates compile");

        Self {
            repository,
            dispatcher: CommandDispatcher::new(projector, renderer),
            order_ids: HashMap::new(),
            next_id: 1,
            last_reply: None,
        }
    }

    /// Hands out the next primary key.
    pub fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for DeskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DeskWorld {
    DeskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
