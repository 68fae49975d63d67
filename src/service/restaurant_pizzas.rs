//! Join rows: creation with existence checks, and listing.

use crate::error::AppError;
use crate::models::{CreatedRestaurantPizza, NewRestaurantPizza, RestaurantPizza};
use crate::service::{PizzaService, RestaurantService};
use sqlx::SqlitePool;

const SELECT_ALL: &str = "SELECT id, price, pizza_id, restaurant_id FROM restaurant_pizzas ORDER BY id";
const INSERT: &str = r#"
    INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id)
    VALUES (?, ?, ?)
    RETURNING id, price, pizza_id, restaurant_id
"#;

pub struct RestaurantPizzaService;

impl RestaurantPizzaService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<RestaurantPizza>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        Ok(sqlx::query_as::<_, RestaurantPizza>(SELECT_ALL).fetch_all(pool).await?)
    }

    /// Check that both referenced rows exist, insert, and read back the nested
    /// representation, all in one transaction. A missing pizza or restaurant is a
    /// validation error, checked in that order.
    pub async fn create(pool: &SqlitePool, new: &NewRestaurantPizza) -> Result<CreatedRestaurantPizza, AppError> {
        let mut tx = pool.begin().await?;
        let pizza = PizzaService::find(&mut tx, new.pizza_id)
            .await?
            .ok_or_else(|| AppError::Validation(format!("pizza {} does not exist", new.pizza_id)))?;
        let restaurant = RestaurantService::find(&mut tx, new.restaurant_id)
            .await?
            .ok_or_else(|| AppError::Validation(format!("restaurant {} does not exist", new.restaurant_id)))?;

        tracing::debug!(sql = %INSERT, price = new.price, pizza_id = new.pizza_id, restaurant_id = new.restaurant_id, "query (tx)");
        let row = sqlx::query_as::<_, RestaurantPizza>(INSERT)
            .bind(new.price)
            .bind(new.pizza_id)
            .bind(new.restaurant_id)
            .fetch_one(&mut *tx)
            .await?;
        let restaurant = RestaurantService::detail(&mut tx, restaurant).await?;
        tx.commit().await?;
        tracing::info!(id = row.id, pizza_id = row.pizza_id, restaurant_id = row.restaurant_id, "restaurant pizza created");
        Ok(CreatedRestaurantPizza { row, pizza, restaurant })
    }
}
