//! Checkout hand-off.

use crate::cart::{Cart, LineItem};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Copy of the cart handed to order submission.
///
/// Taking a snapshot does not change the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSnapshot {
    /// Lines at the time of checkout.
    pub items: Vec<LineItem>,
    /// Sum of quantities.
    pub total_item_count: u64,
    /// Sum of price × quantity.
    pub subtotal: Money,
    /// When the snapshot was taken.
    pub taken_at: DateTime<Utc>,
}

impl CheckoutSnapshot {
    /// Snapshot a cart now.
    pub fn of(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            total_item_count: cart.total_item_count(),
            subtotal: cart.subtotal(),
            taken_at: Utc::now(),
        }
    }

    /// Check if there is nothing to order.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
