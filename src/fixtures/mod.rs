//! Fixtures
//!
//! The bundled festival catalog: the mock CMS data the demo site runs on,
//! embedded as a YAML document.

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{
    Collection, InMemoryCatalog,
    records::{Badge, Event, Faq, GalleryPhoto, Record, ScheduleEntry, Sponsor},
};

static FESTIVAL_YAML: &str = include_str!("festival.yaml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// A full set of catalog collections, one per [`Collection`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureSet {
    /// Ticketed events.
    #[serde(default)]
    pub events: Vec<Event>,

    /// The festival programme.
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,

    /// Photos from previous editions.
    #[serde(default)]
    pub gallery_photos: Vec<GalleryPhoto>,

    /// Sponsors.
    #[serde(default)]
    pub sponsors: Vec<Sponsor>,

    /// Frequently asked questions.
    #[serde(default)]
    pub faqs: Vec<Faq>,

    /// Attendee badges.
    #[serde(default)]
    pub badges: Vec<Badge>,
}

impl FixtureSet {
    /// Parses a fixture set from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the document fails to parse.
    pub fn from_yaml(document: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(document)?)
    }

    /// Seeds an in-memory catalog with every collection in the set.
    #[must_use]
    pub fn into_catalog(self) -> InMemoryCatalog {
        let mut catalog = InMemoryCatalog::new();

        catalog.seed(
            Collection::Events,
            self.events.into_iter().map(Record::Event).collect(),
        );
        catalog.seed(
            Collection::Schedule,
            self.schedule.into_iter().map(Record::Schedule).collect(),
        );
        catalog.seed(
            Collection::GalleryPhotos,
            self.gallery_photos
                .into_iter()
                .map(Record::GalleryPhoto)
                .collect(),
        );
        catalog.seed(
            Collection::Sponsors,
            self.sponsors.into_iter().map(Record::Sponsor).collect(),
        );
        catalog.seed(
            Collection::Faqs,
            self.faqs.into_iter().map(Record::Faq).collect(),
        );
        catalog.seed(
            Collection::Badges,
            self.badges.into_iter().map(Record::Badge).collect(),
        );

        catalog
    }
}

/// Loads the bundled festival catalog data.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the bundled document fails to parse, which
/// would mean the bundled data itself is broken.
pub fn festival() -> Result<FixtureSet, FixtureError> {
    FixtureSet::from_yaml(FESTIVAL_YAML)
}
