//! Pizza restaurants API server.
//!
//! Run from repo root: `cargo run -p pizza-server`
//! Configure with `DATABASE_URL`, `HOST`, `PORT` (or a `.env` file).

use pizza_api::{app, connect, ensure_tables, AppState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pizza_api=info,pizza_server=info,tower_http=debug")),
        )
        .init();

    let pool = connect(&settings).await?;
    ensure_tables(&pool).await?;
    let state = AppState::new(pool);

    let router = app(state, &settings);
    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
