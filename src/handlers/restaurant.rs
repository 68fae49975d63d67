//! Restaurant handlers: collection, detail, delete and the restaurant's pizzas.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::response::{created, deleted, ok};
use crate::serializer::{only_many, to_dict, RESTAURANT_LIST_FIELDS};
use crate::service::{RequestValidator, RestaurantService};
use crate::state::AppState;
use axum::extract::{Path, State};

const RESTAURANT: &str = "Restaurant";

/// Path ids are integers; anything else cannot name a restaurant.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::NotFound(RESTAURANT))
}

/// GET /restaurants
pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let restaurants = RestaurantService::list(&state.pool).await?;
    Ok(ok(only_many(&restaurants, RESTAURANT_LIST_FIELDS)?))
}

/// POST /restaurants
pub async fn create(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let new = RequestValidator::restaurant(body.as_object())?;
    let restaurant = RestaurantService::create(&state.pool, &new).await?;
    Ok(created(to_dict(&restaurant)?))
}

/// GET /restaurants/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let restaurant = RestaurantService::read(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(RESTAURANT))?;
    Ok(ok(to_dict(&restaurant)?))
}

/// DELETE /restaurants/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !RestaurantService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(RESTAURANT));
    }
    Ok(deleted("Restaurant deleted"))
}

/// GET /restaurants/:id/pizzas
pub async fn pizzas(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let pizzas = RestaurantService::pizzas(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(RESTAURANT))?;
    Ok(ok(to_dict(&pizzas)?))
}
