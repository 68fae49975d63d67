//! Restaurant queries, including the cascading delete.

use crate::error::AppError;
use crate::models::{NewRestaurant, Pizza, Restaurant, RestaurantDetail, RestaurantPizza, RestaurantPizzaEntry};
use sqlx::{SqliteConnection, SqlitePool};

const SELECT_ALL: &str = "SELECT id, name, address FROM restaurants ORDER BY id";
const SELECT_ONE: &str = "SELECT id, name, address FROM restaurants WHERE id = ?";
const INSERT: &str = "INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING id, name, address";
const DELETE_JOIN_ROWS: &str = "DELETE FROM restaurant_pizzas WHERE restaurant_id = ?";
const DELETE_ONE: &str = "DELETE FROM restaurants WHERE id = ?";
const SELECT_ENTRIES: &str = r#"
    SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
           p.name AS pizza_name, p.ingredients AS pizza_ingredients
    FROM restaurant_pizzas rp
    JOIN pizzas p ON p.id = rp.pizza_id
    WHERE rp.restaurant_id = ?
    ORDER BY rp.id
"#;
const SELECT_PIZZAS: &str = r#"
    SELECT p.id, p.name, p.ingredients
    FROM restaurant_pizzas rp
    JOIN pizzas p ON p.id = rp.pizza_id
    WHERE rp.restaurant_id = ?
    ORDER BY rp.id
"#;

#[derive(sqlx::FromRow)]
struct EntryRow {
    id: i64,
    price: i64,
    pizza_id: i64,
    restaurant_id: i64,
    pizza_name: String,
    pizza_ingredients: String,
}

impl From<EntryRow> for RestaurantPizzaEntry {
    fn from(r: EntryRow) -> Self {
        RestaurantPizzaEntry {
            row: RestaurantPizza {
                id: r.id,
                price: r.price,
                pizza_id: r.pizza_id,
                restaurant_id: r.restaurant_id,
            },
            pizza: Pizza {
                id: r.pizza_id,
                name: r.pizza_name,
                ingredients: r.pizza_ingredients,
            },
        }
    }
}

pub struct RestaurantService;

impl RestaurantService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Restaurant>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        Ok(sqlx::query_as::<_, Restaurant>(SELECT_ALL).fetch_all(pool).await?)
    }

    /// Insert and return the full representation (a new restaurant has no join rows yet).
    pub async fn create(pool: &SqlitePool, new: &NewRestaurant) -> Result<RestaurantDetail, AppError> {
        tracing::debug!(sql = %INSERT, name = %new.name, address = %new.address, "query");
        let restaurant = sqlx::query_as::<_, Restaurant>(INSERT)
            .bind(&new.name)
            .bind(&new.address)
            .fetch_one(pool)
            .await?;
        tracing::info!(id = restaurant.id, "restaurant created");
        Ok(RestaurantDetail {
            restaurant,
            restaurant_pizzas: Vec::new(),
        })
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<RestaurantDetail>, AppError> {
        let mut conn = pool.acquire().await?;
        match Self::find(&mut conn, id).await? {
            Some(restaurant) => Ok(Some(Self::detail(&mut conn, restaurant).await?)),
            None => Ok(None),
        }
    }

    /// Delete the restaurant's join rows, then the restaurant, in one transaction.
    /// Returns false when there was no such restaurant.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let mut tx = pool.begin().await?;
        if Self::find(&mut tx, id).await?.is_none() {
            return Ok(false);
        }
        tracing::debug!(sql = %DELETE_JOIN_ROWS, id, "query (tx)");
        let join_rows = sqlx::query(DELETE_JOIN_ROWS).bind(id).execute(&mut *tx).await?;
        tracing::debug!(sql = %DELETE_ONE, id, "query (tx)");
        sqlx::query(DELETE_ONE).bind(id).execute(&mut *tx).await?;
        tx.commit().await?;
        tracing::info!(id, restaurant_pizzas = join_rows.rows_affected(), "restaurant deleted");
        Ok(true)
    }

    /// Pizzas served by the restaurant, one per join row. None when the restaurant is missing.
    pub async fn pizzas(pool: &SqlitePool, id: i64) -> Result<Option<Vec<Pizza>>, AppError> {
        let mut conn = pool.acquire().await?;
        if Self::find(&mut conn, id).await?.is_none() {
            return Ok(None);
        }
        tracing::debug!(sql = %SELECT_PIZZAS, id, "query");
        let pizzas = sqlx::query_as::<_, Pizza>(SELECT_PIZZAS)
            .bind(id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(Some(pizzas))
    }

    pub(crate) async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Restaurant>, AppError> {
        tracing::debug!(sql = %SELECT_ONE, id, "query");
        Ok(sqlx::query_as::<_, Restaurant>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?)
    }

    pub(crate) async fn detail(conn: &mut SqliteConnection, restaurant: Restaurant) -> Result<RestaurantDetail, AppError> {
        tracing::debug!(sql = %SELECT_ENTRIES, id = restaurant.id, "query");
        let rows = sqlx::query_as::<_, EntryRow>(SELECT_ENTRIES)
            .bind(restaurant.id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(RestaurantDetail {
            restaurant,
            restaurant_pizzas: rows.into_iter().map(RestaurantPizzaEntry::from).collect(),
        })
    }
}
