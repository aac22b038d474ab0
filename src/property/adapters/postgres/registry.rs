//! `PostgreSQL` implementation of the address registry.

use super::{models::NewPropertyRow, schema::properties};
use crate::database::LazyPgPool;
use crate::property::{
    domain::PropertyAddress,
    ports::{AddressRegistry, AddressRegistryError, AddressRegistryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use mockable::Clock;

/// `PostgreSQL`-backed address registry.
///
/// Registration timestamps come from the injected clock.
#[derive(Debug, Clone)]
pub struct PostgresAddressRegistry<C: Clock + Send + Sync> {
    pool: LazyPgPool,
    clock: C,
}

impl<C: Clock + Send + Sync> PostgresAddressRegistry<C> {
    /// Creates a registry over the shared lazy pool.
    #[must_use]
    pub const fn new(pool: LazyPgPool, clock: C) -> Self {
        Self { pool, clock }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AddressRegistryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AddressRegistryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self
            .pool
            .acquire()
            .await
            .map_err(AddressRegistryError::persistence)?;
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AddressRegistryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AddressRegistryError::persistence)?
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> AddressRegistry for PostgresAddressRegistry<C> {
    async fn list_addresses(&self) -> AddressRegistryResult<Vec<PropertyAddress>> {
        self.run_blocking(|connection| {
            let rows = properties::table
                .select(properties::address)
                .distinct()
                .order(properties::address.asc())
                .load::<String>(connection)
                .map_err(AddressRegistryError::persistence)?;
            rows.into_iter()
                .map(|raw| PropertyAddress::new(raw).map_err(AddressRegistryError::persistence))
                .collect()
        })
        .await
    }

    async fn exists(&self, address: &PropertyAddress) -> AddressRegistryResult<bool> {
        let lookup = address.as_str().to_owned();
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                properties::table.filter(properties::address.eq(lookup)),
            ))
            .get_result::<bool>(connection)
            .map_err(AddressRegistryError::persistence)
        })
        .await
    }

    async fn register(&self, address: &PropertyAddress) -> AddressRegistryResult<bool> {
        let row = NewPropertyRow {
            address: address.as_str().to_owned(),
            created_at: self.clock.utc(),
        };
        self.run_blocking(move |connection| {
            let inserted = diesel::insert_into(properties::table)
                .values(&row)
                .on_conflict_do_nothing()
                .execute(connection)
                .map_err(AddressRegistryError::persistence)?;
            Ok(inserted > 0)
        })
        .await
    }
}
