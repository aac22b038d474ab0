//! In-memory address registry for tests and local runs.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use crate::property::{
    domain::PropertyAddress,
    ports::{AddressRegistry, AddressRegistryError, AddressRegistryResult},
};

/// Thread-safe in-memory address registry.
///
/// Addresses are kept in a [`BTreeSet`] so listing is naturally sorted and
/// deduplicated.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAddressRegistry {
    addresses: Arc<RwLock<BTreeSet<PropertyAddress>>>,
}

impl InMemoryAddressRegistry {
    /// Creates an empty in-memory registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the given addresses.
    #[must_use]
    pub fn with_addresses(addresses: impl IntoIterator<Item = PropertyAddress>) -> Self {
        Self {
            addresses: Arc::new(RwLock::new(addresses.into_iter().collect())),
        }
    }
}

#[async_trait]
impl AddressRegistry for InMemoryAddressRegistry {
    async fn list_addresses(&self) -> AddressRegistryResult<Vec<PropertyAddress>> {
        let addresses = self.addresses.read().map_err(|err| {
            AddressRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(addresses.iter().cloned().collect())
    }

    async fn exists(&self, address: &PropertyAddress) -> AddressRegistryResult<bool> {
        let addresses = self.addresses.read().map_err(|err| {
            AddressRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(addresses.contains(address))
    }

    async fn register(&self, address: &PropertyAddress) -> AddressRegistryResult<bool> {
        let mut addresses = self.addresses.write().map_err(|err| {
            AddressRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(addresses.insert(address.clone()))
    }
}
