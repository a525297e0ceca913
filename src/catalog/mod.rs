//! Content catalog
//!
//! The catalog is the read-only set of content collections the site shows:
//! events, schedule, gallery photos, sponsors, FAQs and badges. Providers
//! resolve whole collections at a time; a fetch that fails is downgraded to
//! an empty collection at the call site via [`get_all_or_empty`].

use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::warn;

use crate::catalog::records::Record;

pub mod memory;
pub mod provider;
pub mod records;

pub use memory::InMemoryCatalog;
pub use provider::{CatalogProvider, MockCatalogProvider};

/// Errors related to catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The collection name does not match any known collection.
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    /// The backing store failed to resolve the collection.
    #[error("failed to fetch collection {collection}: {message}")]
    Fetch {
        /// Collection that was requested.
        collection: Collection,

        /// Provider-specific failure detail.
        message: String,
    },
}

/// Identifier of a content collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Ticketed events.
    Events,

    /// The festival programme.
    Schedule,

    /// Photos from previous editions.
    GalleryPhotos,

    /// Sponsors.
    Sponsors,

    /// Frequently asked questions.
    Faqs,

    /// Attendee badges.
    Badges,
}

impl Collection {
    /// All collections, in the order the site presents them.
    pub const ALL: [Self; 6] = [
        Self::Events,
        Self::Schedule,
        Self::GalleryPhotos,
        Self::Sponsors,
        Self::Faqs,
        Self::Badges,
    ];

    /// The CMS collection id.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Schedule => "schedule",
            Self::GalleryPhotos => "galleryphotos",
            Self::Sponsors => "sponsors",
            Self::Faqs => "faqs",
            Self::Badges => "badges",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Collection {
    type Err = CatalogError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.id() == name)
            .ok_or_else(|| CatalogError::UnknownCollection(name.to_owned()))
    }
}

/// One fetched collection: its records and the total record count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionPage {
    /// The fetched records.
    pub items: Vec<Record>,

    /// Total number of records in the collection.
    pub total_count: u64,
}

impl CollectionPage {
    /// An empty page, what a failed fetch degrades to.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a page from a list of records.
    #[must_use]
    pub fn from_records(items: Vec<Record>) -> Self {
        let total_count = items.len() as u64;
        Self { items, total_count }
    }

    /// Projects the page into one record type, dropping records of any other
    /// kind.
    #[must_use]
    pub fn typed<T>(self, project: impl Fn(Record) -> Option<T>) -> Vec<T> {
        self.items.into_iter().filter_map(project).collect()
    }
}

/// Fetches a collection, treating failure as an empty catalog.
///
/// The failure is logged and swallowed; the page-level caller proceeds with
/// zero results rather than surfacing a fatal error.
pub async fn get_all_or_empty(
    provider: &dyn CatalogProvider,
    collection: Collection,
) -> CollectionPage {
    match provider.get_all(collection).await {
        Ok(page) => page,
        Err(error) => {
            warn!(%collection, %error, "catalog fetch failed, treating as empty");
            CollectionPage::empty()
        }
    }
}
