//! `PostgreSQL` integration tests for the address registry.

use super::helpers::{SteppingClock, TestDatabase, address, postgres_cluster, test_runtime};
use chrono::{DateTime, TimeZone, Utc};
use diesel::prelude::*;
use inspection_desk::property::{
    adapters::postgres::PostgresAddressRegistry, domain::PropertyAddress, ports::AddressRegistry,
};
use pg_embedded_setup_unpriv::TestCluster;
use rstest::rstest;

#[derive(diesel::QueryableByName)]
struct RegisteredAt {
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    created_at: DateTime<Utc>,
}

#[rstest]
fn listing_is_sorted_and_deduplicated(
    postgres_cluster: Option<&'static TestCluster>,
) -> Result<(), eyre::Report> {
    let Some(cluster) = postgres_cluster else {
        return Ok(());
    };
    let database = TestDatabase::create(cluster, "registry_listing")?;
    let registry = PostgresAddressRegistry::new(database.pool(), SteppingClock::default());
    let runtime = test_runtime()?;

    for raw in ["9 Quay Lane", "12 Main St", "12   Main St", "3 Hill Road"] {
        runtime.block_on(registry.register(&address(raw)?))?;
    }
    let listed = runtime.block_on(registry.list_addresses())?;

    let raw: Vec<&str> = listed.iter().map(PropertyAddress::as_str).collect();
    eyre::ensure!(
        raw == ["12 Main St", "3 Hill Road", "9 Quay Lane"],
        "unexpected listing: {raw:?}"
    );
    Ok(())
}

#[rstest]
fn register_is_idempotent_and_membership_is_normalised(
    postgres_cluster: Option<&'static TestCluster>,
) -> Result<(), eyre::Report> {
    let Some(cluster) = postgres_cluster else {
        return Ok(());
    };
    let database = TestDatabase::create(cluster, "registry_register")?;
    let registry = PostgresAddressRegistry::new(database.pool(), SteppingClock::default());
    let runtime = test_runtime()?;

    let first = runtime.block_on(registry.register(&address("7 Harbour Road")?))?;
    let second = runtime.block_on(registry.register(&address(" 7  Harbour Road ")?))?;

    eyre::ensure!(first, "first registration should insert");
    eyre::ensure!(!second, "repeat registration should be a no-op");
    eyre::ensure!(
        runtime.block_on(registry.exists(&address("7 Harbour  Road")?))?,
        "spacing variant should match the registered address"
    );
    eyre::ensure!(
        !runtime.block_on(registry.exists(&address("7 Harbour Rd")?))?,
        "different wording must not match"
    );
    eyre::ensure!(
        runtime.block_on(registry.list_addresses())?.len() == 1,
        "registry should hold a single address"
    );
    Ok(())
}

#[rstest]
fn registration_time_comes_from_the_clock(
    postgres_cluster: Option<&'static TestCluster>,
) -> Result<(), eyre::Report> {
    let Some(cluster) = postgres_cluster else {
        return Ok(());
    };
    let database = TestDatabase::create(cluster, "registry_clock")?;
    let registry = PostgresAddressRegistry::new(database.pool(), SteppingClock::default());
    let runtime = test_runtime()?;

    runtime.block_on(registry.register(&address("12 Main St")?))?;

    let mut conn = PgConnection::establish(&database.url())?;
    let row = diesel::sql_query("SELECT created_at FROM properties WHERE address = $1")
        .bind::<diesel::sql_types::Text, _>("12 Main St")
        .get_result::<RegisteredAt>(&mut conn)?;
    let expected = Utc
        .with_ymd_and_hms(2026, 10, 1, 8, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid expected timestamp"))?;
    eyre::ensure!(
        row.created_at == expected,
        "expected registration at {expected}, found {}",
        row.created_at
    );
    Ok(())
}
