//! Cart Observers

use slotmap::new_key_type;

use crate::cart::LineItem;

new_key_type! {
    /// Subscriber Key
    pub struct SubscriberKey;
}

/// Trait for receiving cart change notifications.
///
/// A rendering layer registers an observer with
/// [`CartStore::subscribe`](crate::cart::CartStore::subscribe) and re-renders
/// from the line items it is handed. Mutations that leave the cart unchanged
/// do not notify.
pub trait CartObserver {
    /// Called after every state-changing cart mutation with the new line items.
    fn cart_changed(&mut self, items: &[LineItem]);
}

/// Observer that ignores all notifications.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {
    fn cart_changed(&mut self, _items: &[LineItem]) {}
}
