//! The pizza record and the payloads used to create and replace it.
//!
//! On the wire every type uses camelCase field names and encodes `price` as a JSON
//! number: `{"id":1,"name":"Margherita","isGlutenFree":false,"price":7.5}`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Pizzas. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PizzaId(pub u32);

impl From<u32> for PizzaId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PizzaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pizza on the menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
/// The `id` is assigned by the store and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pizza {
    pub id: PizzaId,
    pub name: String,
    pub is_gluten_free: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Pizza {
    /// Creates a new Pizza instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the store)
    /// * `name` - Display name, not required to be unique
    /// * `is_gluten_free` - Whether the pizza is gluten free
    /// * `price` - Price in the menu currency, unchecked
    pub fn new(id: PizzaId, name: impl Into<String>, is_gluten_free: bool, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            is_gluten_free,
            price,
        }
    }
}

/// Payload for adding a pizza.
///
/// Carries no id: the store assigns one. An `id` field in a JSON body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PizzaCreate {
    pub name: String,
    pub is_gluten_free: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl PizzaCreate {
    pub fn new(name: impl Into<String>, is_gluten_free: bool, price: Decimal) -> Self {
        Self {
            name: name.into(),
            is_gluten_free,
            price,
        }
    }
}

/// Payload for replacing a pizza.
///
/// This is the full record, not a patch: every field overwrites the stored value.
/// `id` is optional; when present it must name the pizza being replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PizzaUpdate {
    #[serde(default)]
    pub id: Option<PizzaId>,
    pub name: String,
    pub is_gluten_free: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<Pizza> for PizzaUpdate {
    fn from(pizza: Pizza) -> Self {
        Self {
            id: Some(pizza.id),
            name: pizza.name,
            is_gluten_free: pizza.is_gluten_free,
            price: pizza.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pizza_json_uses_camel_case_and_numeric_price() {
        let pizza = Pizza::new(PizzaId(1), "Margherita", false, Decimal::new(750, 2));
        let json = serde_json::to_value(&pizza).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Margherita",
                "isGlutenFree": false,
                "price": 7.5
            })
        );
    }

    #[test]
    fn test_create_payload_ignores_client_id() {
        let body = r#"{"id": 99, "name": "Capricciosa", "isGlutenFree": false, "price": 9.00}"#;
        let params: PizzaCreate = serde_json::from_str(body).unwrap();

        assert_eq!(params, PizzaCreate::new("Capricciosa", false, Decimal::new(9, 0)));
    }

    #[test]
    fn test_update_payload_id_is_optional() {
        let body = r#"{"name": "Funghi", "isGlutenFree": true, "price": 8.5}"#;
        let update: PizzaUpdate = serde_json::from_str(body).unwrap();

        assert_eq!(update.id, None);
        assert_eq!(update.price, Decimal::new(85, 1));
    }
}
