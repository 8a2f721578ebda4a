//! Cart persistence port and its key-value store adapter.

use bite_store::{keys, KeyValueStore};

use crate::cart::Cart;
use crate::error::CartError;
use crate::money::Currency;
use crate::record;

/// Loads and saves the whole cart.
///
/// `save` is always a full overwrite of the previously stored cart.
pub trait CartRepository {
    /// Load the persisted cart.
    ///
    /// Returns `None` if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// - `Storage` if the store can't be read
    /// - `Decode` if the stored value is not a JSON array
    fn load(&self) -> Result<Option<Cart>, CartError>;

    /// Replace the persisted cart.
    ///
    /// # Errors
    ///
    /// - `Storage` if the store rejects the write (quota, unavailable)
    fn save(&self, cart: &Cart) -> Result<(), CartError>;

    /// Currency of every cart this repository loads or starts.
    fn currency(&self) -> Currency;
}

impl<R: CartRepository + ?Sized> CartRepository for &R {
    fn load(&self) -> Result<Option<Cart>, CartError> {
        (**self).load()
    }

    fn save(&self, cart: &Cart) -> Result<(), CartError> {
        (**self).save(cart)
    }

    fn currency(&self) -> Currency {
        (**self).currency()
    }
}

impl<R: CartRepository + ?Sized> CartRepository for Box<R> {
    fn load(&self) -> Result<Option<Cart>, CartError> {
        (**self).load()
    }

    fn save(&self, cart: &Cart) -> Result<(), CartError> {
        (**self).save(cart)
    }

    fn currency(&self) -> Currency {
        (**self).currency()
    }
}

/// Cart repository writing to the [`keys::CART`] slot of a key-value store.
#[derive(Debug, Clone)]
pub struct StoreCartRepository<S> {
    store: S,
    currency: Currency,
}

impl<S: KeyValueStore> StoreCartRepository<S> {
    /// Create a repository over `store`, reading prices in `currency`.
    pub fn new(store: S, currency: Currency) -> Self {
        Self { store, currency }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume and return the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> CartRepository for StoreCartRepository<S> {
    fn load(&self) -> Result<Option<Cart>, CartError> {
        let Some(raw) = self.store.get(keys::CART)? else {
            return Ok(None);
        };
        let cart = record::decode(&raw, self.currency)?;
        tracing::debug!(key = keys::CART, lines = cart.unique_item_count(), "loaded cart");
        Ok(Some(cart))
    }

    fn save(&self, cart: &Cart) -> Result<(), CartError> {
        let raw = record::encode(cart)?;
        self.store.set(keys::CART, &raw)?;
        tracing::debug!(key = keys::CART, bytes = raw.len(), "saved cart");
        Ok(())
    }

    fn currency(&self) -> Currency {
        self.currency
    }
}
