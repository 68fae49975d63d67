//! Common routes: index banner, health, readiness, version.

use crate::state::AppState;
use crate::store::TABLE_NAMES;
use axum::{extract::State, http::StatusCode, response::Html, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

/// Readiness report: the store answers and every resource table is present.
#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
    tables: i64,
}

impl Readiness {
    fn reply(self) -> (StatusCode, Json<Readiness>) {
        let code = if self.status == "ok" { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
        (code, Json(self))
    }
}

async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let found = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN (?, ?, ?)",
    )
    .bind(TABLE_NAMES[0])
    .bind(TABLE_NAMES[1])
    .bind(TABLE_NAMES[2])
    .fetch_one(&state.pool)
    .await;
    let report = match found {
        Ok(n) if n == TABLE_NAMES.len() as i64 => Readiness { status: "ok", database: "ok", tables: n },
        Ok(n) => {
            tracing::warn!(tables = n, "resource tables missing");
            Readiness { status: "degraded", database: "schema incomplete", tables: n }
        }
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            Readiness { status: "degraded", database: "unavailable", tables: 0 }
        }
    };
    report.reply()
}

async fn version() -> Json<Value> {
    Json(json!({ "name": env!("CARGO_PKG_NAME"), "version": env!("CARGO_PKG_VERSION") }))
}

/// GET /, /health, /ready, /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
