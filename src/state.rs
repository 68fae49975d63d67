//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Handed to every handler through `State`. The pool is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        AppState { pool }
    }
}
