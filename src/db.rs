use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;
use crate::error::{AppError, Result};
use std::time::Duration;

/// Schema for the time-tracking tables. The partial unique index on open
/// shifts enforces at-most-one-open-shift-per-user at the storage layer.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id      UUID PRIMARY KEY,
    name    TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS shifts (
    id          UUID PRIMARY KEY,
    user_id     UUID NOT NULL REFERENCES users (id),
    started_at  TIMESTAMPTZ NOT NULL,
    ended_at    TIMESTAMPTZ
);

CREATE UNIQUE INDEX IF NOT EXISTS shifts_one_open_per_user
    ON shifts (user_id) WHERE ended_at IS NULL;

CREATE INDEX IF NOT EXISTS shifts_user_started
    ON shifts (user_id, started_at DESC);

CREATE TABLE IF NOT EXISTS summaries (
    id            UUID PRIMARY KEY,
    user_id       UUID NOT NULL REFERENCES users (id),
    period_kind   TEXT NOT NULL,
    period_start  TIMESTAMPTZ NOT NULL,
    period_end    TIMESTAMPTZ NOT NULL,
    hours         DOUBLE PRECISION NOT NULL
);
"#;

/// Creates a new database connection pool.
///
/// # Arguments
///
/// * `database_url` - The URL of the PostgreSQL database.
///
/// # Returns
///
/// A `Result` containing the `Pool`.
pub fn create_pool(database_url: &str) -> Result<Pool> {
    let pg_config: tokio_postgres::Config = database_url.parse()?;

    let manager = Manager::from_config(
        pg_config,
        NoTls,
        ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        },
    );

    // Small-team attendance tracking; a modest pool is plenty.
    Pool::builder(manager)
        .max_size(16)
        .runtime(Runtime::Tokio1)
        .wait_timeout(Some(Duration::from_secs(5)))
        .create_timeout(Some(Duration::from_secs(2)))
        .recycle_timeout(Some(Duration::from_secs(1)))
        .build()
        .map_err(|e| AppError::Internal(format!("Pool build error: {}", e)))
}

/// Ensures the tables and indexes exist. Idempotent; runs at startup.
pub async fn init_schema(pool: &Pool) -> Result<()> {
    let client = pool.get().await?;
    client.batch_execute(SCHEMA).await?;
    Ok(())
}
