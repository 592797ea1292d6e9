use chrono::{DateTime, Utc};
use deadpool_postgres::Pool;
use tokio_postgres::Row;
use uuid::Uuid;
use crate::{
    error::Result,
    models::shift::{Shift, ShiftWithUser},
};

/// A helper function to map a `tokio_postgres::Row` to a `Shift`.
pub(crate) fn row_to_shift(row: &Row) -> Result<Shift> {
    Ok(Shift {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        started_at: row.try_get("started_at")?,
        ended_at: row.try_get("ended_at")?,
    })
}

fn row_to_shift_with_user(row: &Row) -> Result<ShiftWithUser> {
    Ok(ShiftWithUser {
        shift: row_to_shift(row)?,
        user_name: row.try_get("name")?,
    })
}

/// Opens a new shift for the user, unless one is already open.
///
/// The insert is conditional on no open shift existing, so the
/// at-most-one-open-shift invariant holds without a separate read.
/// Returns `None` when the user already has an open shift.
pub async fn clock_in(
    pool: &Pool,
    user_id: &Uuid,
    started_at: DateTime<Utc>,
) -> Result<Option<Shift>> {
    let client = pool.get().await?;
    let id = Uuid::new_v4();
    let row = client
        .query_opt(
            r#"
            INSERT INTO shifts (id, user_id, started_at)
            SELECT $1, $2, $3
            WHERE NOT EXISTS (
                SELECT 1 FROM shifts WHERE user_id = $2 AND ended_at IS NULL
            )
            RETURNING id, user_id, started_at, ended_at
            "#,
            &[&id, user_id, &started_at],
        )
        .await?;
    row.map(|r| row_to_shift(&r)).transpose()
}

/// Closes the user's most recently started open shift.
///
/// The find-and-update runs as a single statement, so two concurrent
/// clock-outs cannot close the same shift twice. Returns `None` when the
/// user has no open shift.
pub async fn clock_out(
    pool: &Pool,
    user_id: &Uuid,
    ended_at: DateTime<Utc>,
) -> Result<Option<Shift>> {
    let client = pool.get().await?;
    let row = client
        .query_opt(
            r#"
            UPDATE shifts SET ended_at = $2
            WHERE id = (
                SELECT id FROM shifts
                WHERE user_id = $1 AND ended_at IS NULL
                ORDER BY started_at DESC
                LIMIT 1
            )
            RETURNING id, user_id, started_at, ended_at
            "#,
            &[user_id, &ended_at],
        )
        .await?;
    row.map(|r| row_to_shift(&r)).transpose()
}

/// Lists every shift joined with its owner's name, newest first.
pub async fn list_with_users(pool: &Pool) -> Result<Vec<ShiftWithUser>> {
    let client = pool.get().await?;
    let rows = client
        .query(
            r#"
            SELECT s.id, s.user_id, s.started_at, s.ended_at, u.name
            FROM shifts s
            JOIN users u ON u.id = s.user_id
            ORDER BY s.started_at DESC
            "#,
            &[],
        )
        .await?;
    rows.iter().map(row_to_shift_with_user).collect()
}

/// Closed shifts for one user that started at or after `since`.
pub async fn closed_since_for_user(
    pool: &Pool,
    user_id: &Uuid,
    since: DateTime<Utc>,
) -> Result<Vec<Shift>> {
    let client = pool.get().await?;
    let rows = client
        .query(
            r#"
            SELECT id, user_id, started_at, ended_at
            FROM shifts
            WHERE user_id = $1 AND started_at >= $2 AND ended_at IS NOT NULL
            "#,
            &[user_id, &since],
        )
        .await?;
    rows.iter().map(row_to_shift).collect()
}

/// Closed shifts across all users that started at or after `since`,
/// joined with owner names for the per-user breakdowns.
pub async fn closed_since_with_users(
    pool: &Pool,
    since: DateTime<Utc>,
) -> Result<Vec<ShiftWithUser>> {
    let client = pool.get().await?;
    let rows = client
        .query(
            r#"
            SELECT s.id, s.user_id, s.started_at, s.ended_at, u.name
            FROM shifts s
            JOIN users u ON u.id = s.user_id
            WHERE s.started_at >= $1 AND s.ended_at IS NOT NULL
            "#,
            &[&since],
        )
        .await?;
    rows.iter().map(row_to_shift_with_user).collect()
}
