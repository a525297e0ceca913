//! Mela prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartObserver, CartStore, LineItem, NewLineItem, NoopObserver, SubscriberKey},
    catalog::{
        CatalogError, CatalogProvider, Collection, CollectionPage, InMemoryCatalog,
        get_all_or_empty,
        records::{Badge, Event, Faq, GalleryPhoto, Record, ScheduleEntry, Sponsor},
    },
    collections::{facet_values, filter_by, sort_by_date},
    fixtures::{FixtureError, FixtureSet},
    prices::Price,
};
