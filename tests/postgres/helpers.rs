//! Shared helpers for the `PostgreSQL` adapter tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use margiana::{
    dispatch::CommandDispatcher,
    shipment::{
        adapters::postgres::{PostgresShipmentRepository, lazy_pool},
        render::ViewRenderer,
        services::QueryProjector,
    },
};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Tables as the office application creates them.
pub const SCHEMA_SQL: &str = include_str!("fixtures/schema.sql");

/// Orders, containers and tasks every test starts from.
pub const SEED_SQL: &str = include_str!("fixtures/seed.sql");

/// Template database holding the schema and seed rows.
pub const TEMPLATE_DB: &str = "margiana_test_template";

/// Projector type wired to the Postgres adapter.
pub type PgProjector = QueryProjector<PostgresShipmentRepository, DefaultClock>;

/// Builds a current-thread runtime for driving the async ports.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
pub fn test_runtime() -> Result<Runtime, BoxError> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

fn load_seed(url: &str) -> Result<(), BoxError> {
    let mut connection = PgConnection::establish(url)?;
    connection.batch_execute(SCHEMA_SQL)?;
    connection.batch_execute(SEED_SQL)?;
    Ok(())
}

/// Drops its database when the test finishes.
pub struct DatabaseGuard {
    cluster: PostgresCluster,
    name: String,
}

impl Drop for DatabaseGuard {
    fn drop(&mut self) {
        drop(self.cluster.drop_database(&self.name));
    }
}

/// A private copy of the seeded template with a repository over it.
pub struct SeededDatabase {
    /// Repository over the copy.
    pub repository: Arc<PostgresShipmentRepository>,
    /// Runtime for driving the async ports.
    pub runtime: Runtime,
    // Declared last so the pool closes before the database is dropped.
    _guard: DatabaseGuard,
}

impl SeededDatabase {
    /// Projector over this database.
    #[must_use]
    pub fn projector(&self) -> PgProjector {
        QueryProjector::new(Arc::clone(&self.repository), Arc::new(DefaultClock))
    }

    /// Dispatcher over this database.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in templates fail to compile.
    pub fn dispatcher(
        &self,
    ) -> Result<CommandDispatcher<PostgresShipmentRepository, DefaultClock>, BoxError> {
        Ok(CommandDispatcher::new(self.projector(), ViewRenderer::new()?))
    }
}

/// Seeded database for one test, or `None` when no cluster is available.
///
/// # Errors
///
/// Returns an error if the template or the copy cannot be created.
#[fixture]
pub fn seeded_database(
    postgres_cluster: Option<PostgresCluster>,
) -> Result<Option<SeededDatabase>, BoxError> {
    let Some(cluster) = postgres_cluster else {
        return Ok(None);
    };
    cluster.ensure_template_exists(TEMPLATE_DB, load_seed)?;

    let name = format!("margiana_{}", Uuid::new_v4().simple());
    cluster.create_database_from_template(&name, TEMPLATE_DB)?;
    let guard = DatabaseGuard {
        cluster,
        name: name.clone(),
    };
    let pool = lazy_pool(&cluster.database_url(&name), 2, Duration::from_secs(10));
    Ok(Some(SeededDatabase {
        repository: Arc::new(PostgresShipmentRepository::new(pool)),
        runtime: test_runtime()?,
        _guard: guard,
    }))
}
