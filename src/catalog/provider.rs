//! Catalog provider contract.

use async_trait::async_trait;
use mockall::automock;

use crate::catalog::{CatalogError, Collection, CollectionPage};

/// Read-only access to the content collections backing the site.
///
/// In a full system this resolves over the network or a storage layer; the
/// bundled [`InMemoryCatalog`](crate::catalog::InMemoryCatalog) resolves
/// immediately from memory.
#[automock]
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Retrieves every record in the given collection.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the backing store fails to resolve the
    /// collection.
    async fn get_all(&self, collection: Collection) -> Result<CollectionPage, CatalogError>;
}
