//! HTTP handlers for restaurants, pizzas and their priced associations.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
