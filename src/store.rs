//! Connection pool and table DDL. Tables are created on startup if missing.

use crate::config::Settings;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Resource tables created by [`ensure_tables`].
pub const TABLE_NAMES: [&str; 3] = ["restaurants", "pizzas", "restaurant_pizzas"];

/// DDL in dependency order: parents before the join table.
const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        ingredients TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS restaurant_pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        price INTEGER NOT NULL CHECK (price BETWEEN 1 AND 30),
        pizza_id INTEGER NOT NULL REFERENCES pizzas (id),
        restaurant_id INTEGER NOT NULL REFERENCES restaurants (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_restaurant_pizzas_restaurant_id ON restaurant_pizzas (restaurant_id)",
];

/// Open the pool described by `settings`. The database file is created if it does not exist
/// and foreign keys are enforced on every connection.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&settings.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool_opts = if settings.is_in_memory() {
        // One connection, kept forever: a second or recycled connection would see an empty database.
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(settings.max_connections)
    };
    let pool = pool_opts.connect_with(opts).await?;
    tracing::debug!(url = %settings.database_url, "database pool ready");
    Ok(pool)
}

pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
