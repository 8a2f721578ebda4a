//! Shopping cart module.
//!
//! Contains the line item and cart types, the persisting aggregator and the
//! checkout snapshot.

mod aggregator;
mod cart;
mod line_item;
mod snapshot;

pub use aggregator::CartAggregator;
pub use cart::Cart;
pub use line_item::{LineItem, PLACEHOLDER_IMAGE_URL};
pub use snapshot::CheckoutSnapshot;
