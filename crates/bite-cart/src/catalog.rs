//! Catalog item descriptor handed to the cart.

use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable menu item as supplied by the restaurant catalog.
///
/// The cart copies these attributes when the item is first added and never
/// re-fetches them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Catalog identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price. Never negative.
    pub price: Money,
    /// Picture shown next to the item.
    pub image_url: Option<String>,
}

impl MenuItem {
    /// Create a menu item without an image.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: Money) -> Self {
        debug_assert!(!price.is_negative(), "menu prices are never negative");
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_url: None,
        }
    }

    /// Set the image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}
