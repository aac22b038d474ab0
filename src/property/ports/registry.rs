//! Registry port for property address lookup.

use crate::property::domain::PropertyAddress;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for address registry operations.
pub type AddressRegistryResult<T> = Result<T, AddressRegistryError>;

/// Address registry contract.
#[async_trait]
pub trait AddressRegistry: Send + Sync {
    /// Returns every registered address, sorted ascending and deduplicated.
    async fn list_addresses(&self) -> AddressRegistryResult<Vec<PropertyAddress>>;

    /// Reports whether the address is registered.
    async fn exists(&self, address: &PropertyAddress) -> AddressRegistryResult<bool>;

    /// Registers an address.
    ///
    /// Returns `true` when the address was newly inserted and `false` when it
    /// was already present.
    async fn register(&self, address: &PropertyAddress) -> AddressRegistryResult<bool>;
}

/// Errors returned by address registry implementations.
#[derive(Debug, Clone, Error)]
pub enum AddressRegistryError {
    /// Persistence-layer failure.
    #[error("address registry unavailable: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AddressRegistryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
