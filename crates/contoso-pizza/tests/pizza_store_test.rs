use actor_framework::ActorClient;
use contoso_pizza::config::StoreConfig;
use contoso_pizza::lifecycle::PizzaSystem;
use contoso_pizza::model::{Pizza, PizzaCreate, PizzaId, PizzaUpdate};
use contoso_pizza::pizza_actor::PizzaError;
use rust_decimal::Decimal;
use std::collections::HashSet;

fn start() -> PizzaSystem {
    PizzaSystem::new(&StoreConfig::default()).expect("Failed to start pizza system")
}

fn capricciosa() -> PizzaCreate {
    PizzaCreate::new("Capricciosa", false, Decimal::new(900, 2))
}

#[tokio::test]
async fn test_store_starts_with_seed_records() {
    let system = start();

    let all = system.pizza_client.list_pizzas().await.unwrap();
    assert_eq!(
        all,
        vec![
            Pizza::new(PizzaId(1), "Margherita", false, Decimal::new(750, 2)),
            Pizza::new(PizzaId(2), "Funghi", true, Decimal::new(850, 2)),
        ]
    );

    system.shutdown().await.unwrap();
}

/// Add, get, delete walk-through on a fresh store.
#[tokio::test]
async fn test_add_get_delete_scenario() {
    let system = start();
    let client = &system.pizza_client;

    let added = client.add_pizza(capricciosa()).await.unwrap();
    assert_eq!(added.id, PizzaId(3));
    assert_eq!(added.name, "Capricciosa");
    assert_eq!(client.list_pizzas().await.unwrap().len(), 3);
    assert_eq!(client.get(PizzaId(3)).await.unwrap(), Some(added));

    client.delete(PizzaId(1)).await.unwrap();
    assert_eq!(client.get(PizzaId(1)).await.unwrap(), None);
    assert_eq!(client.list_pizzas().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_added_ids_strictly_increase_and_are_never_reused() {
    let system = start();
    let client = &system.pizza_client;

    let mut last = PizzaId(2);
    for round in 0..5 {
        let pizza = client.add_pizza(capricciosa()).await.unwrap();
        assert!(pizza.id > last, "round {round}: {} not above {}", pizza.id, last);
        last = pizza.id;

        // Deleting the newest record must not free its id.
        client.delete(pizza.id).await.unwrap();
    }

    let next = client.add_pizza(capricciosa()).await.unwrap();
    assert_eq!(next.id, PizzaId(8));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_get_missing_id_is_absent() {
    let system = start();

    assert_eq!(system.pizza_client.get(PizzaId(404)).await.unwrap(), None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_replaces_whole_record() {
    let system = start();
    let client = &system.pizza_client;

    let mut funghi = client.get(PizzaId(2)).await.unwrap().unwrap();
    funghi.name = "Funghi Porcini".to_string();

    let updated = client
        .update_pizza(PizzaId(2), PizzaUpdate::from(funghi.clone()))
        .await
        .unwrap();
    assert_eq!(updated, funghi);

    let stored = client.get(PizzaId(2)).await.unwrap().unwrap();
    assert_eq!(stored.name, "Funghi Porcini");
    assert!(stored.is_gluten_free);
    assert_eq!(stored.price, Decimal::new(850, 2));

    // Other fields are overwritten too, not merged.
    let replacement = PizzaUpdate {
        id: None,
        name: "Diavola".to_string(),
        is_gluten_free: false,
        price: Decimal::new(1100, 2),
    };
    client.update_pizza(PizzaId(2), replacement).await.unwrap();
    assert_eq!(
        client.get(PizzaId(2)).await.unwrap(),
        Some(Pizza::new(PizzaId(2), "Diavola", false, Decimal::new(1100, 2)))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_missing_id_is_not_found_and_changes_nothing() {
    let system = start();
    let client = &system.pizza_client;
    let before = client.list_pizzas().await.unwrap();

    let update = PizzaUpdate {
        id: Some(PizzaId(77)),
        name: "Phantom".to_string(),
        is_gluten_free: false,
        price: Decimal::ONE,
    };
    let result = client.update_pizza(PizzaId(77), update).await;

    assert_eq!(result, Err(PizzaError::NotFound("77".to_string())));
    assert_eq!(client.list_pizzas().await.unwrap(), before);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_id_is_noop() {
    let system = start();
    let client = &system.pizza_client;

    assert_eq!(client.delete(PizzaId(42)).await.unwrap(), None);
    assert_eq!(client.list_pizzas().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

/// Many tasks adding at once must never receive the same id.
#[tokio::test]
async fn test_concurrent_adds_get_unique_ids() {
    let system = start();

    let mut handles = vec![];
    for i in 0..20 {
        let client = system.pizza_client.clone();
        handles.push(tokio::spawn(async move {
            client
                .add_pizza(PizzaCreate::new(format!("Special {i}"), i % 2 == 0, Decimal::TEN))
                .await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let pizza = handle.await.unwrap().unwrap();
        assert!(ids.insert(pizza.id), "duplicate id {}", pizza.id);
    }

    let expected: HashSet<PizzaId> = (3..23).map(PizzaId).collect();
    assert_eq!(ids, expected);
    assert_eq!(system.pizza_client.list_pizzas().await.unwrap().len(), 22);

    system.shutdown().await.unwrap();
}
