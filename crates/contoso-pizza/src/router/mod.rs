//! # Request Router
//!
//! The HTTP surface of the service. Handlers translate requests into store calls and
//! store results into status codes:
//!
//! | Route | Success | Failure |
//! |-------|---------|---------|
//! | `GET /ContosoPizza` | 200 + list | 503 |
//! | `GET /ContosoPizza/{id}` | 200 + record | 404 |
//! | `POST /ContosoPizza` | 201 + record + `Location` | 503 |
//! | `PUT /ContosoPizza/{id}` | 204 | 404, 400 on id mismatch |
//! | `DELETE /ContosoPizza/{id}` | 204, also when absent | 503 |

pub mod error;
pub mod handlers;

pub use error::{ApiError, ErrorBody};

use crate::clients::PizzaClient;
use axum::routing::get;
use axum::Router;

/// Base path of the pizza resource.
pub const PIZZA_ROUTE: &str = "/ContosoPizza";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub pizza_client: PizzaClient,
}

impl AppState {
    pub fn new(pizza_client: PizzaClient) -> Self {
        Self { pizza_client }
    }
}

/// Builds the router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            PIZZA_ROUTE,
            get(handlers::list_pizzas).post(handlers::create_pizza),
        )
        .route(
            &format!("{}/{{id}}", PIZZA_ROUTE),
            get(handlers::get_pizza)
                .put(handlers::update_pizza)
                .delete(handlers::delete_pizza),
        )
        .with_state(state)
}
