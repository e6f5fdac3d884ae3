//! [`ActorEntity`] implementation for [`Pizza`].
//!
//! Pizzas have no dependencies (`Context = ()`) and no creation-time validation.
//! An update is a wholesale replacement of every field except the id.

use super::error::PizzaError;
use crate::model::{Pizza, PizzaCreate, PizzaId, PizzaUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Pizza {
    type Id = PizzaId;
    type Create = PizzaCreate;
    type Update = PizzaUpdate;
    type Context = ();
    type Error = PizzaError;

    fn id(&self) -> &PizzaId {
        &self.id
    }

    fn from_create_params(id: PizzaId, params: PizzaCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.is_gluten_free, params.price))
    }

    async fn on_update(&mut self, update: PizzaUpdate, _ctx: &()) -> Result<(), Self::Error> {
        // The payload id is checked by the caller; the stored id is authoritative.
        self.name = update.name;
        self.is_gluten_free = update.is_gluten_free;
        self.price = update.price;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_on_update_overwrites_every_field_but_id() {
        let mut pizza = Pizza::new(PizzaId(2), "Funghi", true, Decimal::new(850, 2));
        let update = PizzaUpdate {
            id: Some(PizzaId(9)),
            name: "Funghi e Salsiccia".into(),
            is_gluten_free: false,
            price: Decimal::new(1050, 2),
        };

        pizza.on_update(update, &()).await.unwrap();

        assert_eq!(
            pizza,
            Pizza::new(PizzaId(2), "Funghi e Salsiccia", false, Decimal::new(1050, 2))
        );
    }
}
