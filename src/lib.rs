//! Mela
//!
//! Mela is the content catalog and ticket cart engine behind a festival
//! marketing site: read-only content collections served by a catalog
//! provider, generic filtering over them, and a cart state container with
//! change notification for the view layer.

pub mod cart;
pub mod catalog;
pub mod collections;
pub mod fixtures;
pub mod prelude;
pub mod prices;
