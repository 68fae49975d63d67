//! Resource routes for restaurants, pizzas and restaurant pizzas.

use crate::handlers::{pizza, restaurant, restaurant_pizza};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/restaurants", get(restaurant::list).post(restaurant::create))
        .route(
            "/restaurants/:id",
            get(restaurant::read).delete(restaurant::delete),
        )
        .route("/restaurants/:id/pizzas", get(restaurant::pizzas))
        .route("/pizzas", get(pizza::list).post(pizza::create))
        .route(
            "/restaurant_pizzas",
            post(restaurant_pizza::create).get(restaurant_pizza::list),
        )
        .with_state(state)
}
