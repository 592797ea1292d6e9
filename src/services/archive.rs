use chrono::{DateTime, Utc};
use deadpool_postgres::{Pool, Transaction};
use uuid::Uuid;
use crate::{
    error::Result,
    models::summary::{PeriodKind, Summary},
    period,
    repositories::{shift::row_to_shift, summary as summary_repo},
    services::reporting,
};

/// Snapshots per-user hours for every closed shift that started before
/// the current week into `summaries`. Shift records are left in place;
/// the monthly reset handles deletion.
///
/// Re-running appends another batch of summaries for the same window.
pub async fn run_weekly_reset(pool: &Pool, now: DateTime<Utc>) -> Result<usize> {
    let boundary = period::week_start(now);
    let mut client = pool.get().await?;
    let tx = client.transaction().await?;

    let written = snapshot_closed_before(&tx, PeriodKind::Week, boundary, now).await?;
    tx.commit().await?;

    tracing::info!(
        "🗂️ Weekly reset: {} summaries written (boundary {})",
        written,
        boundary
    );
    Ok(written)
}

/// Snapshots per-user hours for every closed shift that started before
/// the current month, then purges all shifts older than that boundary.
/// Snapshot and deletion run in one transaction, so no shift is dropped
/// uncounted. Current-month shifts are untouched.
pub async fn run_monthly_reset(pool: &Pool, now: DateTime<Utc>) -> Result<u64> {
    let boundary = period::month_start(now);
    let mut client = pool.get().await?;
    let tx = client.transaction().await?;

    let written = snapshot_closed_before(&tx, PeriodKind::Month, boundary, now).await?;
    let deleted = tx
        .execute("DELETE FROM shifts WHERE started_at < $1", &[&boundary])
        .await?;
    tx.commit().await?;

    tracing::info!(
        "🧹 Monthly reset: {} summaries written, {} shifts purged (boundary {})",
        written,
        deleted,
        boundary
    );
    Ok(deleted)
}

/// Aggregates closed shifts started before `boundary` per user and writes
/// one summary row per user. Returns how many summaries were written.
async fn snapshot_closed_before(
    tx: &Transaction<'_>,
    kind: PeriodKind,
    boundary: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<usize> {
    let rows = tx
        .query(
            r#"
            SELECT id, user_id, started_at, ended_at
            FROM shifts
            WHERE started_at < $1 AND ended_at IS NOT NULL
            "#,
            &[&boundary],
        )
        .await?;
    let shifts = rows.iter().map(row_to_shift).collect::<Result<Vec<_>>>()?;

    let totals = reporting::hours_by_user_id(&shifts);
    for (user_id, hours) in &totals {
        let summary = Summary {
            id: Uuid::new_v4(),
            user_id: *user_id,
            period_kind: kind,
            period_start: boundary,
            period_end: now,
            hours: *hours,
        };
        summary_repo::insert(tx, &summary).await?;
    }
    Ok(totals.len())
}
