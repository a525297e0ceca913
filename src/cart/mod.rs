//! Ticket cart
//!
//! [`CartStore`] owns the line items a visitor intends to purchase and is the
//! single source of truth the view layer reads and mutates through. Items are
//! unique by event id and keep their insertion order; quantities stay at one
//! or above while an item is present. All operations are total: malformed
//! input degrades to a no-op or a removal, never an error.

use std::fmt;

use slotmap::SlotMap;
use tracing::debug;

use crate::{catalog::records::Event, prices::Price};

pub mod observers;

pub use observers::{CartObserver, NoopObserver, SubscriberKey};

/// One ticket entry in the cart, with quantity.
///
/// All fields other than `quantity` are snapshots taken when the item was
/// first added; they are not re-synced if the catalog changes.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Identifier of the underlying catalog event.
    pub id: String,

    /// Display name snapshot.
    pub name: String,

    /// Unit price snapshot.
    pub price: Price,

    /// Image URL snapshot.
    pub image: String,

    /// Human-readable display date snapshot.
    pub date: String,

    /// Number of tickets; at least one while the item is present.
    pub quantity: u32,
}

impl LineItem {
    /// Returns the price of this line, unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Candidate fields for an item about to be added to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLineItem {
    /// Identifier of the underlying catalog event.
    pub id: String,

    /// Display name to snapshot.
    pub name: String,

    /// Unit price to snapshot.
    pub price: Price,

    /// Image URL to snapshot.
    pub image: String,

    /// Human-readable display date to snapshot.
    pub date: String,
}

impl NewLineItem {
    /// Builds a cart candidate from a catalog event, applying the display
    /// defaults for missing fields.
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            name: event
                .name
                .clone()
                .unwrap_or_else(|| "Unnamed Event".to_owned()),
            price: event.price.unwrap_or(Price::ZERO),
            image: event.image.clone().unwrap_or_default(),
            date: event.display_date(),
        }
    }
}

/// The cart state container.
pub struct CartStore {
    items: Vec<LineItem>,
    subscribers: SlotMap<SubscriberKey, Box<dyn CartObserver>>,
}

impl CartStore {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            subscribers: SlotMap::with_key(),
        }
    }

    /// Returns the line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks whether an item with the given id is in the cart.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Adds a candidate to the cart.
    ///
    /// If an item with the same id already exists its quantity is incremented
    /// by one and the existing snapshot fields win. Otherwise the candidate is
    /// appended with a quantity of one. A candidate with an empty id is
    /// ignored.
    pub fn add_item(&mut self, candidate: NewLineItem) {
        if candidate.id.is_empty() {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.id == candidate.id) {
            item.quantity = item.quantity.saturating_add(1);
            debug!(id = %candidate.id, quantity = item.quantity, "incremented cart item");
        } else {
            debug!(id = %candidate.id, "added cart item");
            self.items.push(LineItem {
                id: candidate.id,
                name: candidate.name,
                price: candidate.price,
                image: candidate.image,
                date: candidate.date,
                quantity: 1,
            });
        }

        self.notify();
    }

    /// Sets the quantity of the item with the given id.
    ///
    /// The quantity is an absolute value, not a delta. A quantity of zero or
    /// below removes the item entirely; an unknown id is a no-op. Values
    /// beyond [`u32::MAX`] clamp.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };

        if item.quantity == quantity {
            return;
        }

        item.quantity = quantity;
        debug!(id = %id, quantity, "updated cart quantity");

        self.notify();
    }

    /// Removes the item with the given id, if present.
    pub fn remove_item(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);

        if self.items.len() != before {
            debug!(id = %id, "removed cart item");
            self.notify();
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }

        self.items.clear();
        debug!("cleared cart");

        self.notify();
    }

    /// Returns the sum of price times quantity over all items.
    #[must_use]
    pub fn total_price(&self) -> Price {
        total_price(&self.items)
    }

    /// Returns the sum of quantities over all items.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        total_items(&self.items)
    }

    /// Registers an observer; it is notified after every state change.
    pub fn subscribe(&mut self, observer: Box<dyn CartObserver>) -> SubscriberKey {
        self.subscribers.insert(observer)
    }

    /// Removes an observer, returning it if the key was live.
    pub fn unsubscribe(&mut self, key: SubscriberKey) -> Option<Box<dyn CartObserver>> {
        self.subscribers.remove(key)
    }

    fn notify(&mut self) {
        for (_, observer) in &mut self.subscribers {
            observer.cart_changed(&self.items);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Calculates the total price of a list of line items.
#[must_use]
pub fn total_price(items: &[LineItem]) -> Price {
    items.iter().map(LineItem::line_total).sum()
}

/// Calculates the total ticket count of a list of line items.
#[must_use]
pub fn total_items(items: &[LineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    fn ticket(id: &str, price: u64) -> NewLineItem {
        NewLineItem {
            id: id.to_owned(),
            name: format!("Event {id}"),
            price: Price::from(price),
            image: String::new(),
            date: "Mar 15, 2026".to_owned(),
        }
    }

    struct CountingObserver {
        calls: Rc<Cell<usize>>,
    }

    impl CartObserver for CountingObserver {
        fn cart_changed(&mut self, _items: &[LineItem]) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[test]
    fn add_new_item_starts_at_quantity_one() {
        let mut cart = CartStore::new();

        cart.add_item(ticket("E1", 299));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.total_price(), Price::from(299));
    }

    #[test]
    fn add_same_id_increments_quantity_and_keeps_first_snapshot() {
        let mut cart = CartStore::new();

        cart.add_item(ticket("E1", 299));

        let mut second = ticket("E1", 999);
        second.name = "Renamed".to_owned();
        cart.add_item(second);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.items()[0].name, "Event E1");
        assert_eq!(cart.items()[0].price, Price::from(299));
        assert_eq!(cart.total_price(), Price::from(598));
    }

    #[test]
    fn add_with_empty_id_is_ignored() {
        let mut cart = CartStore::new();

        cart.add_item(ticket("", 299));

        assert!(cart.is_empty());
    }

    #[test]
    fn repeated_adds_equal_quantity() {
        let mut cart = CartStore::new();

        for _ in 0..4 {
            cart.add_item(ticket("E1", 299));
        }

        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.total_items(), 4);
    }

    #[test]
    fn update_quantity_is_an_absolute_set() {
        let mut cart = CartStore::new();

        cart.add_item(ticket("E1", 299));
        cart.update_quantity("E1", 5);

        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.total_price(), Price::from(1495));
    }

    #[test]
    fn update_quantity_to_zero_removes_the_item() {
        let mut cart = CartStore::new();

        cart.add_item(ticket("E1", 299));
        cart.update_quantity("E1", 0);

        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    #[test]
    fn update_quantity_negative_removes_the_item() {
        let mut cart = CartStore::new();

        cart.add_item(ticket("E1", 299));
        cart.update_quantity("E1", -5);

        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_unknown_id_is_a_no_op() {
        let mut cart = CartStore::new();

        cart.add_item(ticket("E1", 299));
        cart.update_quantity("E2", 3);

        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn remove_item_is_idempotent() {
        let mut cart = CartStore::new();

        cart.add_item(ticket("E1", 299));
        cart.remove_item("E1");
        cart.remove_item("E1");

        assert!(cart.is_empty());
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = CartStore::new();

        cart.add_item(ticket("E1", 299));
        cart.add_item(ticket("E2", 399));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    #[test]
    fn totals_over_distinct_items() {
        let mut cart = CartStore::new();

        cart.add_item(ticket("E1", 299));
        cart.add_item(ticket("E2", 399));

        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), Price::from(698));
    }

    #[test]
    fn ids_stay_unique_across_operations() {
        let mut cart = CartStore::new();

        cart.add_item(ticket("E1", 299));
        cart.add_item(ticket("E2", 399));
        cart.add_item(ticket("E1", 299));
        cart.update_quantity("E2", 4);
        cart.add_item(ticket("E2", 399));

        let mut ids: Vec<&str> = cart.items().iter().map(|item| item.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), cart.len());
    }

    #[test]
    fn contains_reflects_membership() {
        let mut cart = CartStore::new();

        cart.add_item(ticket("E1", 299));

        assert!(cart.contains("E1"));
        assert!(!cart.contains("E2"));
    }

    #[test]
    fn observers_are_notified_once_per_state_change() {
        let calls = Rc::new(Cell::new(0));
        let mut cart = CartStore::new();
        cart.subscribe(Box::new(CountingObserver {
            calls: Rc::clone(&calls),
        }));

        cart.add_item(ticket("E1", 299));
        cart.update_quantity("E1", 3);
        cart.remove_item("E1");

        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn no_ops_do_not_notify() {
        let calls = Rc::new(Cell::new(0));
        let mut cart = CartStore::new();
        cart.subscribe(Box::new(CountingObserver {
            calls: Rc::clone(&calls),
        }));

        cart.remove_item("E1");
        cart.update_quantity("E1", 3);
        cart.clear();
        cart.add_item(ticket("", 299));

        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn unsubscribed_observers_stop_receiving() {
        let calls = Rc::new(Cell::new(0));
        let mut cart = CartStore::new();
        let key = cart.subscribe(Box::new(CountingObserver {
            calls: Rc::clone(&calls),
        }));

        cart.add_item(ticket("E1", 299));
        let removed = cart.unsubscribe(key);
        cart.add_item(ticket("E2", 399));

        assert!(removed.is_some());
        assert_eq!(calls.get(), 1);
    }
}
