//! Persisted line item records.
//!
//! The cart slot holds a JSON array of
//! `{"id", "name", "price", "imageUrl", "quantity"}` objects with `price` in
//! major units. There is no version field, so decoding fills in defaults for
//! optional fields and drops only the records it cannot read.

use crate::cart::{Cart, LineItem};
use crate::error::CartError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Deserializer, Serialize};

/// One line item as written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLineItem {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

impl From<&LineItem> for StoredLineItem {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.as_str().to_string(),
            name: item.name.clone(),
            price: item.price.to_decimal(),
            image_url: item.image_url.clone(),
            quantity: item.quantity,
        }
    }
}

impl StoredLineItem {
    /// Convert into a line item, or `None` if the record can't be in a cart.
    fn into_line_item(self, currency: Currency) -> Option<LineItem> {
        if self.quantity == 0 {
            tracing::warn!(item_id = %self.id, "dropping stored line item with zero quantity");
            return None;
        }
        let price = match Money::try_from_decimal(self.price, currency) {
            Some(price) if !price.is_negative() => price,
            _ => {
                tracing::warn!(item_id = %self.id, price = self.price, "dropping stored line item with invalid price");
                return None;
            }
        };

        Some(LineItem {
            id: ItemId::new(self.id),
            name: self.name,
            price,
            image_url: self.image_url.filter(|url| !url.is_empty()),
            quantity: self.quantity,
        })
    }
}

/// Serialize every line of a cart.
pub fn encode(cart: &Cart) -> Result<String, CartError> {
    let records: Vec<StoredLineItem> = cart.items().iter().map(StoredLineItem::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Parse a stored value back into a cart.
///
/// Fails only if the value isn't a JSON array. Each element is decoded on
/// its own: unreadable records and records that violate the cart invariants
/// are dropped, duplicates merged.
pub fn decode(raw: &str, currency: Currency) -> Result<Cart, CartError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    Ok(Cart::from_items(
        currency,
        values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<StoredLineItem>(value) {
                Ok(record) => record.into_line_item(currency),
                Err(e) => {
                    tracing::warn!(index, error = %e, "dropping unreadable stored line item");
                    None
                }
            }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuItem;

    #[test]
    fn test_encode_field_names() {
        let mut cart = Cart::new(Currency::BRL);
        cart.add_item(
            &MenuItem::new("A", "Burger", Money::from_decimal(18.90, Currency::BRL))
                .with_image_url("burger.png"),
        );

        let raw = encode(&cart).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "id": "A",
                "name": "Burger",
                "price": 18.9,
                "imageUrl": "burger.png",
                "quantity": 1
            }])
        );
    }

    #[test]
    fn test_decode_fills_missing_fields() {
        let cart = decode(r#"[{"id": "A", "price": 18.9}]"#, Currency::BRL).unwrap();
        let line = &cart.items()[0];

        assert_eq!(line.name, "");
        assert_eq!(line.quantity, 1);
        assert!(line.image_url.is_none());
        assert_eq!(line.price.amount_cents, 1890);
    }

    #[test]
    fn test_decode_numeric_ids_and_unknown_fields() {
        let cart = decode(
            r#"[{"id": 42, "name": "Soda", "price": 6.5, "quantity": 2, "restaurantId": 7}]"#,
            Currency::BRL,
        )
        .unwrap();

        assert_eq!(cart.items()[0].id, ItemId::new("42"));
        assert_eq!(cart.total_item_count(), 2);
    }

    #[test]
    fn test_decode_drops_invalid_records() {
        let cart = decode(
            r#"[
                {"id": "A", "price": 18.9, "quantity": 0},
                {"id": "B", "price": -1.0, "quantity": 1},
                {"id": "C", "price": 6.5, "quantity": 1, "imageUrl": ""}
            ]"#,
            Currency::BRL,
        )
        .unwrap();

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.items()[0].id, ItemId::new("C"));
        assert!(cart.items()[0].image_url.is_none());
    }

    #[test]
    fn test_decode_merges_duplicates() {
        let cart = decode(
            r#"[
                {"id": "A", "name": "Burger", "price": 18.9, "quantity": 1},
                {"id": "A", "name": "Burger 2", "price": 99.0, "quantity": 2}
            ]"#,
            Currency::BRL,
        )
        .unwrap();

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[0].name, "Burger");
    }

    #[test]
    fn test_decode_rejects_non_list() {
        assert!(matches!(decode("{}", Currency::BRL), Err(CartError::Decode(_))));
        assert!(matches!(decode("not json", Currency::BRL), Err(CartError::Decode(_))));
        assert!(matches!(decode(r#""[]""#, Currency::BRL), Err(CartError::Decode(_))));
    }

    #[test]
    fn test_decode_keeps_valid_lines_next_to_unreadable_records() {
        let bad_records = [
            r#"{"id": "B", "name": "Pizza"}"#,
            r#"{"price": "32.90"}"#,
            r#"{"id": "B", "price": 32.9, "quantity": -1}"#,
            r#"{"id": "B", "price": null}"#,
            r#"{"name": "no id", "price": 1.0}"#,
            r#""just a string""#,
            "42",
        ];

        for bad in bad_records {
            let raw = format!(r#"[{{"id": "A", "price": 18.9, "quantity": 2}}, {}]"#, bad);
            let cart = decode(&raw, Currency::BRL).unwrap();

            assert_eq!(cart.unique_item_count(), 1, "record {} should be dropped alone", bad);
            let line = &cart.items()[0];
            assert_eq!(line.id, ItemId::new("A"));
            assert_eq!(line.quantity, 2);
            assert_eq!(line.price.amount_cents, 1890);
        }
    }
}
