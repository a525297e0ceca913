//! In-memory catalog provider.

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use crate::{
    catalog::{
        CatalogError, CatalogProvider, Collection, CollectionPage,
        records::Record,
    },
    fixtures::{self, FixtureError},
};

/// A catalog provider serving collections held in memory.
///
/// This is the mock CMS: collections are seeded up front and `get_all` never
/// fails. Collections with no seeded records resolve as empty.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    collections: FxHashMap<Collection, Vec<Record>>,
}

impl InMemoryCatalog {
    /// Creates a catalog with no seeded collections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog seeded with the bundled festival fixture data.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the bundled fixture document fails to
    /// parse.
    pub fn festival() -> Result<Self, FixtureError> {
        Ok(fixtures::festival()?.into_catalog())
    }

    /// Replaces the records of one collection.
    pub fn seed(&mut self, collection: Collection, records: Vec<Record>) {
        self.collections.insert(collection, records);
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn get_all(&self, collection: Collection) -> Result<CollectionPage, CatalogError> {
        let records = self.collections.get(&collection).cloned().unwrap_or_default();

        Ok(CollectionPage::from_records(records))
    }
}
