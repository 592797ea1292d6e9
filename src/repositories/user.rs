use deadpool_postgres::Pool;
use tokio_postgres::Row;
use uuid::Uuid;
use crate::{error::Result, models::user::User};

/// A helper function to map a `tokio_postgres::Row` to a `User`.
fn row_to_user(row: &Row) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

/// Returns the user with the given name, creating it if absent.
///
/// The upsert makes login idempotent by name: two calls with the same
/// name always resolve to the same identity.
pub async fn find_or_create(pool: &Pool, name: &str) -> Result<User> {
    let client = pool.get().await?;
    let id = Uuid::new_v4();
    let row = client
        .query_one(
            r#"
            INSERT INTO users (id, name)
            VALUES ($1, $2)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name
            "#,
            &[&id, &name],
        )
        .await?;
    row_to_user(&row)
}
