//! Student records server.
//!
//! Run from repo root: `cargo run -p student-server`
//! Configure with DATABASE_URL, STUDENTS_SCHEMA, BIND_ADDR, DB_MAX_CONNECTIONS and STORE
//! (or a `.env` file).

use std::sync::Arc;
use student_api::{
    api_router, apply_migrations, ensure_database_exists, AppConfig, AppState, MemoryStudentStore,
    PgStudentStore, StoreKind, StudentStore,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("student_api=info,student_server=info,tower_http=info")
        }))
        .init();

    let config = AppConfig::from_env()?;
    let store: Arc<dyn StudentStore> = match config.store {
        StoreKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            apply_migrations(&pool, &config.schema).await?;
            Arc::new(PgStudentStore::new(pool, config.schema.clone()))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; records are lost on exit");
            Arc::new(MemoryStudentStore::new())
        }
    };

    let app = api_router(AppState::new(store));
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
