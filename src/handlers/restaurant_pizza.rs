//! Restaurant-pizza association handlers.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::response::{created, ok};
use crate::serializer::to_dict;
use crate::service::{RequestValidator, RestaurantPizzaService};
use crate::state::AppState;
use axum::extract::State;

/// GET /restaurant_pizzas
pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = RestaurantPizzaService::list(&state.pool).await?;
    Ok(ok(to_dict(&rows)?))
}

/// POST /restaurant_pizzas
pub async fn create(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let new = RequestValidator::restaurant_pizza(body.as_object())?;
    let row = RestaurantPizzaService::create(&state.pool, &new).await?;
    Ok(created(to_dict(&row)?))
}
