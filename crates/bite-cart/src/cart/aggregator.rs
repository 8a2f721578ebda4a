//! Persisting cart aggregator.

use crate::cart::{Cart, CheckoutSnapshot, LineItem};
use crate::catalog::MenuItem;
use crate::error::CartError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use crate::repository::CartRepository;

/// The session's cart plus the repository it is persisted through.
///
/// Every mutation is applied in memory first and then written out in full.
/// Storage failures never reach the caller: they are logged, and the
/// in-memory cart stays authoritative for the rest of the session.
///
/// # Example
///
/// ```rust,ignore
/// let repo = StoreCartRepository::new(FileStore::open(".bite")?, Currency::BRL);
/// let mut cart = CartAggregator::open(repo);
///
/// cart.add_item(&burger);
/// cart.add_item(&burger);
/// cart.decrement_item(&burger.id, false);
///
/// println!("{} items, {}", cart.total_item_count(), cart.subtotal());
/// ```
#[derive(Debug)]
pub struct CartAggregator<R> {
    cart: Cart,
    repository: R,
    last_save_error: Option<CartError>,
}

impl<R: CartRepository> CartAggregator<R> {
    /// Restore the persisted cart, or start empty.
    ///
    /// A missing, unreadable or corrupt stored value all yield an empty cart
    /// in the repository's currency.
    pub fn open(repository: R) -> Self {
        let currency = repository.currency();
        let cart = match repository.load() {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(currency),
            Err(e) => {
                tracing::warn!(error = %e, "could not restore cart, starting empty");
                Cart::new(currency)
            }
        };

        Self {
            cart,
            repository,
            last_save_error: None,
        }
    }

    /// Add one unit of a menu item and persist.
    ///
    /// An item priced in another currency is rejected and nothing is
    /// written. Returns whether the cart changed.
    pub fn add_item(&mut self, item: &MenuItem) -> bool {
        if !self.cart.add_item(item) {
            return false;
        }
        tracing::debug!(item_id = %item.id, "added item to cart");
        self.persist();
        true
    }

    /// Remove one unit (or the whole line with `remove_all`) and persist.
    ///
    /// Unknown ids are ignored and nothing is written.
    pub fn decrement_item(&mut self, id: &ItemId, remove_all: bool) -> bool {
        if !self.cart.decrement_item(id, remove_all) {
            tracing::debug!(item_id = %id, "decrement for item not in cart ignored");
            return false;
        }
        self.persist();
        true
    }

    /// Remove a whole line and persist.
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        self.decrement_item(id, true)
    }

    /// Empty the cart and persist.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Replace the in-memory cart with whatever storage holds now.
    ///
    /// Meant for an external storage-change notification: the stored value
    /// wins wholesale, with no merging. If storage can't be read the current
    /// cart is kept. Returns whether the cart was replaced.
    pub fn reload_from_store(&mut self) -> bool {
        match self.repository.load() {
            Ok(Some(cart)) => {
                self.cart = cart;
                true
            }
            Ok(None) => {
                self.cart = Cart::new(self.repository.currency());
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not reload cart, keeping current state");
                false
            }
        }
    }

    /// Copy of the current lines and totals for order submission.
    ///
    /// The cart is left as is; clearing after a successful order is up to
    /// the caller.
    pub fn checkout_snapshot(&self) -> CheckoutSnapshot {
        CheckoutSnapshot::of(&self.cart)
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Sum of quantities.
    pub fn total_item_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    /// Sum of price × quantity.
    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// Whether the last write reached storage.
    pub fn persisted_ok(&self) -> bool {
        self.last_save_error.is_none()
    }

    /// Error from the last write, if it failed.
    pub fn last_save_error(&self) -> Option<&CartError> {
        self.last_save_error.as_ref()
    }

    /// The repository the cart is persisted through.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn persist(&mut self) {
        match self.repository.save(&self.cart) {
            Ok(()) => self.last_save_error = None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to persist cart, keeping in-memory state");
                self.last_save_error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::StoreCartRepository;
    use bite_store::{keys, KeyValueStore, MemoryStore, StoreError};
    use std::cell::Cell;

    fn burger() -> MenuItem {
        MenuItem::new("A", "Burger", Money::from_decimal(18.90, Currency::BRL))
    }

    fn pizza() -> MenuItem {
        MenuItem::new("B", "Pizza", Money::from_decimal(32.90, Currency::BRL))
    }

    /// Repository counting writes, optionally failing them.
    #[derive(Default)]
    struct CountingRepository {
        saves: Cell<usize>,
        fail_saves: bool,
        fail_loads: bool,
        currency: Currency,
    }

    impl CartRepository for CountingRepository {
        fn load(&self) -> Result<Option<Cart>, CartError> {
            if self.fail_loads {
                return Err(StoreError::Unavailable("test".to_string()).into());
            }
            Ok(None)
        }

        fn save(&self, _cart: &Cart) -> Result<(), CartError> {
            self.saves.set(self.saves.get() + 1);
            if self.fail_saves {
                return Err(StoreError::QuotaExceeded {
                    key: keys::CART.to_string(),
                    size: 1,
                    limit: 0,
                }
                .into());
            }
            Ok(())
        }

        fn currency(&self) -> Currency {
            self.currency
        }
    }

    #[test]
    fn test_open_empty() {
        let agg = CartAggregator::open(CountingRepository::default());
        assert!(agg.items().is_empty());
        assert!(agg.persisted_ok());
    }

    #[test]
    fn test_every_mutation_writes() {
        let mut agg = CartAggregator::open(CountingRepository::default());

        agg.add_item(&burger());
        agg.add_item(&burger());
        agg.decrement_item(&ItemId::new("A"), false);
        agg.clear();
        assert_eq!(agg.repository().saves.get(), 4);
    }

    #[test]
    fn test_noop_decrement_does_not_write() {
        let mut agg = CartAggregator::open(CountingRepository::default());
        agg.add_item(&burger());

        assert!(!agg.decrement_item(&ItemId::new("nonexistent-id"), false));
        assert_eq!(agg.repository().saves.get(), 1);
        assert_eq!(agg.total_item_count(), 1);
    }

    #[test]
    fn test_clear_on_empty_cart_still_writes() {
        let mut agg = CartAggregator::open(CountingRepository::default());
        agg.clear();
        assert_eq!(agg.repository().saves.get(), 1);
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let repo = CountingRepository {
            fail_saves: true,
            ..Default::default()
        };
        let mut agg = CartAggregator::open(repo);

        agg.add_item(&burger());
        agg.add_item(&pizza());
        agg.add_item(&pizza());

        assert_eq!(agg.subtotal().amount_cents, 8470);
        assert!(!agg.persisted_ok());
        assert!(matches!(
            agg.last_save_error(),
            Some(CartError::Storage(StoreError::QuotaExceeded { .. }))
        ));
    }

    #[test]
    fn test_load_failure_starts_empty() {
        let repo = CountingRepository {
            fail_loads: true,
            currency: Currency::USD,
            ..Default::default()
        };
        let agg = CartAggregator::open(repo);
        assert!(agg.cart().is_empty());
        assert_eq!(agg.subtotal(), Money::zero(Currency::USD));
    }

    #[test]
    fn test_empty_cart_takes_repository_currency() {
        let store = MemoryStore::new();
        let agg = CartAggregator::open(StoreCartRepository::new(store.clone(), Currency::USD));
        assert_eq!(agg.cart().currency(), Currency::USD);
        assert_eq!(agg.subtotal(), Money::zero(Currency::USD));

        store.set(keys::CART, r#"[{"id":"A","price":2.5,"quantity":2}]"#).unwrap();
        let agg = CartAggregator::open(StoreCartRepository::new(store, Currency::USD));
        assert_eq!(agg.subtotal(), Money::new(500, Currency::USD));
    }

    #[test]
    fn test_foreign_currency_item_is_not_added_or_written() {
        let mut agg = CartAggregator::open(CountingRepository::default());
        let dollar_burger = MenuItem::new("A", "Burger", Money::from_decimal(4.0, Currency::USD));

        assert!(!agg.add_item(&dollar_burger));
        assert!(agg.cart().is_empty());
        assert_eq!(agg.repository().saves.get(), 0);

        assert!(agg.add_item(&burger()));
        assert_eq!(agg.repository().saves.get(), 1);
    }

    #[test]
    fn test_save_recovers_after_store_comes_back() {
        let store = MemoryStore::new();
        let mut agg =
            CartAggregator::open(StoreCartRepository::new(store.clone(), Currency::BRL));

        store.set_available(false);
        agg.add_item(&burger());
        assert!(!agg.persisted_ok());

        store.set_available(true);
        agg.add_item(&burger());
        assert!(agg.persisted_ok());
        assert!(store.get(keys::CART).unwrap().unwrap().contains(r#""quantity":2"#));
    }

    #[test]
    fn test_checkout_snapshot_leaves_cart() {
        let mut agg = CartAggregator::open(CountingRepository::default());
        agg.add_item(&burger());

        let snapshot = agg.checkout_snapshot();
        assert_eq!(snapshot.total_item_count, 1);
        assert_eq!(agg.total_item_count(), 1);
        assert_eq!(agg.repository().saves.get(), 1);
    }

    #[test]
    fn test_reload_replaces_wholesale() {
        let store = MemoryStore::new();
        let mut tab_one =
            CartAggregator::open(StoreCartRepository::new(store.clone(), Currency::BRL));
        let mut tab_two =
            CartAggregator::open(StoreCartRepository::new(store.clone(), Currency::BRL));

        tab_one.add_item(&burger());
        tab_two.add_item(&pizza());

        // Last writer wins; tab one's burger is gone after reload.
        assert!(tab_one.reload_from_store());
        assert_eq!(tab_one.items().len(), 1);
        assert_eq!(tab_one.items()[0].id, ItemId::new("B"));
    }

    #[test]
    fn test_reload_keeps_state_when_store_unreadable() {
        let store = MemoryStore::new();
        let mut agg =
            CartAggregator::open(StoreCartRepository::new(store.clone(), Currency::BRL));
        agg.add_item(&burger());

        store.set(keys::CART, "corrupt").unwrap();
        assert!(!agg.reload_from_store());
        assert_eq!(agg.total_item_count(), 1);

        store.delete(keys::CART).unwrap();
        assert!(agg.reload_from_store());
        assert!(agg.cart().is_empty());
    }
}
