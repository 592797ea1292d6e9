use deadpool_postgres::Transaction;
use crate::{error::Result, models::summary::Summary};

/// Appends one summary row inside the caller's transaction.
///
/// Summaries are write-only from the application's point of view: the
/// archival job produces them and nothing in the request path reads
/// them back.
pub async fn insert(tx: &Transaction<'_>, summary: &Summary) -> Result<()> {
    tx.execute(
        r#"
        INSERT INTO summaries (id, user_id, period_kind, period_start, period_end, hours)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
        &[
            &summary.id,
            &summary.user_id,
            &summary.period_kind.as_str(),
            &summary.period_start,
            &summary.period_end,
            &summary.hours,
        ],
    )
    .await?;
    Ok(())
}
