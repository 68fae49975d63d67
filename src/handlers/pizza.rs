//! Pizza collection handlers.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::response::{created, ok};
use crate::serializer::{only_many, to_dict, PIZZA_LIST_FIELDS};
use crate::service::{PizzaService, RequestValidator};
use crate::state::AppState;
use axum::extract::State;

/// GET /pizzas
pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let pizzas = PizzaService::list(&state.pool).await?;
    Ok(ok(only_many(&pizzas, PIZZA_LIST_FIELDS)?))
}

/// POST /pizzas
pub async fn create(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let new = RequestValidator::pizza(body.as_object())?;
    let pizza = PizzaService::create(&state.pool, &new).await?;
    Ok(created(to_dict(&pizza)?))
}
