//! Rows of the three tables and the nested shapes returned by the API.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

/// Join row between a restaurant and a pizza, carrying the price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// A join row as it appears inside a restaurant: the pizza is nested, the restaurant is not.
#[derive(Clone, Debug, Serialize)]
pub struct RestaurantPizzaEntry {
    #[serde(flatten)]
    pub row: RestaurantPizza,
    pub pizza: Pizza,
}

/// Full restaurant representation.
#[derive(Clone, Debug, Serialize)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

/// Response for a newly created join row: both sides fully nested.
#[derive(Clone, Debug, Serialize)]
pub struct CreatedRestaurantPizza {
    #[serde(flatten)]
    pub row: RestaurantPizza,
    pub pizza: Pizza,
    pub restaurant: RestaurantDetail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}
