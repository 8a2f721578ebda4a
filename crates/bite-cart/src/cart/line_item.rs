//! Line item type.

use crate::catalog::MenuItem;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Image shown for line items that have no picture of their own.
pub const PLACEHOLDER_IMAGE_URL: &str = "/static/img/item-placeholder.png";

/// One distinct menu item in the cart plus its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog item identifier.
    pub id: ItemId,
    /// Name copied from the catalog at add time.
    pub name: String,
    /// Unit price copied from the catalog at add time.
    pub price: Money,
    /// Image copied from the catalog at add time.
    pub image_url: Option<String>,
    /// Quantity. At least 1 while the item is in a cart.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1 from a catalog descriptor.
    pub fn from_menu_item(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            image_url: item.image_url.clone(),
            quantity: 1,
        }
    }

    /// Price multiplied by quantity.
    pub fn line_total(&self) -> Money {
        self.price.saturating_mul(self.quantity)
    }

    /// Image URL, or the placeholder when the item has none.
    pub fn image_url_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_from_menu_item() {
        let menu = MenuItem::new("B", "Pizza", Money::new(3290, Currency::BRL));
        let line = LineItem::from_menu_item(&menu);

        assert_eq!(line.id, menu.id);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.line_total(), Money::new(3290, Currency::BRL));
    }

    #[test]
    fn test_line_total() {
        let mut line =
            LineItem::from_menu_item(&MenuItem::new("B", "Pizza", Money::new(3290, Currency::BRL)));
        line.quantity = 3;
        assert_eq!(line.line_total().amount_cents, 9870);
    }

    #[test]
    fn test_placeholder_image() {
        let menu = MenuItem::new("A", "Burger", Money::new(1890, Currency::BRL));
        let line = LineItem::from_menu_item(&menu);
        assert_eq!(line.image_url_or_placeholder(), PLACEHOLDER_IMAGE_URL);

        let line = LineItem::from_menu_item(&menu.with_image_url("burger.png"));
        assert_eq!(line.image_url_or_placeholder(), "burger.png");
    }
}
