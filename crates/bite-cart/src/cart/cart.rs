//! Cart aggregate.

use crate::cart::LineItem;
use crate::catalog::MenuItem;
use crate::ids::ItemId;
use crate::money::{Currency, Money};

/// An ordered collection of line items, at most one per item id.
///
/// Every line has `quantity >= 1`; a line that would reach zero is removed.
/// Totals are recomputed from the lines on every read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Build a cart from existing lines, restoring the invariants.
    ///
    /// Lines with quantity 0 are dropped and repeated ids are merged into the
    /// first occurrence by summing quantities. Lines priced in another
    /// currency are dropped.
    pub fn from_items(currency: Currency, items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new(currency);
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            if item.price.currency != currency {
                tracing::warn!(
                    item_id = %item.id,
                    currency = item.price.currency.code(),
                    "dropping line priced in another currency"
                );
                continue;
            }
            match cart.items.iter_mut().find(|i| i.id == item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Add one unit of a menu item.
    ///
    /// An existing line for the same id gains one unit and keeps its
    /// original name, price and image. An item priced in a currency other
    /// than the cart's is rejected: the cart is left unchanged and `false`
    /// is returned.
    pub fn add_item(&mut self, item: &MenuItem) -> bool {
        if item.price.currency != self.currency {
            tracing::warn!(
                item_id = %item.id,
                item_currency = item.price.currency.code(),
                cart_currency = self.currency.code(),
                "rejecting item priced in another currency"
            );
            return false;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(LineItem::from_menu_item(item));
        }
        true
    }

    /// Remove one unit of an item, or the whole line when `remove_all` is set.
    ///
    /// A line at quantity 1 is removed. Returns `false` and leaves the cart
    /// untouched if no line matches `id`.
    pub fn decrement_item(&mut self, id: &ItemId, remove_all: bool) -> bool {
        let Some(pos) = self.items.iter().position(|i| &i.id == id) else {
            return false;
        };

        if remove_all || self.items[pos].quantity <= 1 {
            self.items.remove(pos);
        } else {
            self.items[pos].quantity -= 1;
        }
        true
    }

    /// Remove a whole line regardless of quantity.
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        self.decrement_item(id, true)
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all lines.
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of price × quantity across all lines, excluding fees and taxes.
    pub fn subtotal(&self) -> Money {
        Money::sum(self.items.iter().map(LineItem::line_total), self.currency)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the line for an item id.
    pub fn get(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currency of every price in the cart.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}
