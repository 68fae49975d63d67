//! Services over the SQLite pool, one per resource, plus request validation.

mod pizzas;
mod restaurant_pizzas;
mod restaurants;
mod validation;
pub use pizzas::PizzaService;
pub use restaurant_pizzas::RestaurantPizzaService;
pub use restaurants::RestaurantService;
pub use validation::RequestValidator;
