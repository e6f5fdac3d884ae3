//! Route handlers. Each one makes exactly one store call through [`PizzaClient`].
//!
//! [`PizzaClient`]: crate::clients::PizzaClient

use super::error::ApiError;
use super::{AppState, PIZZA_ROUTE};
use crate::model::{Pizza, PizzaCreate, PizzaId, PizzaUpdate};
use crate::pizza_actor::PizzaError;
use actor_framework::ActorClient;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::debug;

/// `GET /ContosoPizza`
pub async fn list_pizzas(State(state): State<AppState>) -> Result<Json<Vec<Pizza>>, ApiError> {
    Ok(Json(state.pizza_client.list_pizzas().await?))
}

/// `GET /ContosoPizza/{id}`: 404 when absent.
pub async fn get_pizza(
    State(state): State<AppState>,
    Path(id): Path<PizzaId>,
) -> Result<Json<Pizza>, ApiError> {
    match state.pizza_client.get(id).await? {
        Some(pizza) => Ok(Json(pizza)),
        None => Err(PizzaError::NotFound(id.to_string()).into()),
    }
}

/// `POST /ContosoPizza`: 201 with the stored record and its `Location`.
pub async fn create_pizza(
    State(state): State<AppState>,
    Json(params): Json<PizzaCreate>,
) -> Result<impl IntoResponse, ApiError> {
    let pizza = state.pizza_client.add_pizza(params).await?;
    let location = format!("{}/{}", PIZZA_ROUTE, pizza.id);
    debug!(id = %pizza.id, %location, "Pizza created");

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(pizza)))
}

/// `PUT /ContosoPizza/{id}`: 204 on success, 404 when absent, 400 when the body names
/// a different id.
pub async fn update_pizza(
    State(state): State<AppState>,
    Path(id): Path<PizzaId>,
    Json(update): Json<PizzaUpdate>,
) -> Result<StatusCode, ApiError> {
    if let Some(body_id) = update.id {
        if body_id != id {
            return Err(ApiError::BadRequest(format!(
                "Body id {} does not match path id {}",
                body_id, id
            )));
        }
    }

    state.pizza_client.update_pizza(id, update).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /ContosoPizza/{id}`: 204 whether or not the pizza existed.
pub async fn delete_pizza(
    State(state): State<AppState>,
    Path(id): Path<PizzaId>,
) -> Result<StatusCode, ApiError> {
    let removed = state.pizza_client.delete(id).await?;
    debug!(%id, removed = removed.is_some(), "Pizza delete handled");
    Ok(StatusCode::NO_CONTENT)
}
