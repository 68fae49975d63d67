//! Pizza queries.

use crate::error::AppError;
use crate::models::{NewPizza, Pizza};
use sqlx::{SqliteConnection, SqlitePool};

const SELECT_ALL: &str = "SELECT id, name, ingredients FROM pizzas ORDER BY id";
const SELECT_ONE: &str = "SELECT id, name, ingredients FROM pizzas WHERE id = ?";
const INSERT: &str = "INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING id, name, ingredients";

pub struct PizzaService;

impl PizzaService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Pizza>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        Ok(sqlx::query_as::<_, Pizza>(SELECT_ALL).fetch_all(pool).await?)
    }

    pub async fn create(pool: &SqlitePool, new: &NewPizza) -> Result<Pizza, AppError> {
        tracing::debug!(sql = %INSERT, name = %new.name, ingredients = %new.ingredients, "query");
        let pizza = sqlx::query_as::<_, Pizza>(INSERT)
            .bind(&new.name)
            .bind(&new.ingredients)
            .fetch_one(pool)
            .await?;
        tracing::info!(id = pizza.id, "pizza created");
        Ok(pizza)
    }

    pub(crate) async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Pizza>, AppError> {
        tracing::debug!(sql = %SELECT_ONE, id, "query");
        Ok(sqlx::query_as::<_, Pizza>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?)
    }
}
