//! Pizza restaurants API: restaurants, pizzas and the priced association between them.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod serializer;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, app, common_routes};
pub use state::AppState;
pub use store::{connect, ensure_tables};
