//! In-memory integration tests for the address registry.

use super::helpers::address;
use inspection_desk::property::{
    adapters::memory::InMemoryAddressRegistry, domain::PropertyAddress, ports::AddressRegistry,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_is_sorted_and_deduplicated() -> Result<(), eyre::Report> {
    let registry = InMemoryAddressRegistry::with_addresses([
        address("9 Quay Lane")?,
        address("12 Main St")?,
        address("12   Main St")?,
        address("3 Hill Road")?,
    ]);

    let listed = registry.list_addresses().await?;

    let raw: Vec<&str> = listed.iter().map(PropertyAddress::as_str).collect();
    eyre::ensure!(
        raw == ["12 Main St", "3 Hill Road", "9 Quay Lane"],
        "unexpected listing: {raw:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn membership_uses_normalised_addresses() -> Result<(), eyre::Report> {
    let registry = InMemoryAddressRegistry::with_addresses([address("12 Main St")?]);

    eyre::ensure!(
        registry.exists(&address("  12  Main St ")?).await?,
        "spacing variant should match the registered address"
    );
    eyre::ensure!(
        !registry.exists(&address("12 Main Street")?).await?,
        "different wording must not match"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_is_idempotent() -> Result<(), eyre::Report> {
    let registry = InMemoryAddressRegistry::new();

    let first = registry.register(&address("7 Harbour Road")?).await?;
    let second = registry.register(&address("7 Harbour Road")?).await?;

    eyre::ensure!(first, "first registration should insert");
    eyre::ensure!(!second, "repeat registration should be a no-op");
    eyre::ensure!(
        registry.list_addresses().await?.len() == 1,
        "registry should hold a single address"
    );
    Ok(())
}
