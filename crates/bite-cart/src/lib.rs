//! Shopping cart aggregation for the Bite food-delivery client.
//!
//! This crate owns the "what the user intends to order" state:
//!
//! - **Cart**: ordered line items, one per menu item, with derived totals
//! - **Aggregator**: the cart plus its persistence, written after every change
//! - **Repository**: the storage port and its key-value store adapter
//!
//! # Example
//!
//! ```rust,ignore
//! use bite_cart::prelude::*;
//! use bite_store::MemoryStore;
//!
//! let repo = StoreCartRepository::new(MemoryStore::new(), Currency::BRL);
//! let mut cart = CartAggregator::open(repo);
//!
//! let burger = MenuItem::new("A", "Burger", Money::from_decimal(18.90, Currency::BRL));
//! cart.add_item(&burger);
//! cart.add_item(&burger);
//!
//! assert_eq!(cart.total_item_count(), 2);
//! println!("Subtotal: {}", cart.subtotal());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod record;
pub mod repository;

pub use cart::{Cart, CartAggregator, CheckoutSnapshot, LineItem};
pub use catalog::MenuItem;
pub use error::CartError;
pub use ids::ItemId;
pub use money::{Currency, Money};
pub use repository::{CartRepository, StoreCartRepository};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartAggregator, CheckoutSnapshot, LineItem, PLACEHOLDER_IMAGE_URL};
    pub use crate::catalog::MenuItem;
    pub use crate::error::CartError;
    pub use crate::ids::ItemId;
    pub use crate::money::{Currency, Money};
    pub use crate::repository::{CartRepository, StoreCartRepository};
}
