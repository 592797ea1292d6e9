use chrono::Utc;
use deadpool_postgres::Pool;
use uuid::Uuid;
use crate::{
    error::{AppError, Result},
    models::{shift::Shift, user::User},
    repositories::{shift as shift_repo, user as user_repo},
};

/// Resolves a display name to a user, creating the user on first login.
pub async fn login(pool: &Pool, name: &str) -> Result<User> {
    let user = user_repo::find_or_create(pool, name).await?;
    tracing::info!("👤 Login: {} ({})", user.name, user.id);
    Ok(user)
}

/// Opens a shift for the user at the current instant.
///
/// A user can hold at most one open shift; a second clock-in is rejected
/// rather than silently stacking open shifts.
pub async fn clock_in(pool: &Pool, user_id: &Uuid) -> Result<Shift> {
    let shift = shift_repo::clock_in(pool, user_id, Utc::now())
        .await?
        .ok_or_else(|| AppError::State("Ya existe un turno abierto".to_string()))?;
    tracing::info!("🕘 Clock-in: user {} shift {}", user_id, shift.id);
    Ok(shift)
}

/// Closes the user's most recently started open shift at the current
/// instant. Returns the closed shift and its elapsed minutes.
pub async fn clock_out(pool: &Pool, user_id: &Uuid) -> Result<(Shift, i64)> {
    let shift = shift_repo::clock_out(pool, user_id, Utc::now())
        .await?
        .ok_or_else(|| AppError::State("No hay turno activo".to_string()))?;
    // The update just set ended_at, so elapsed time is always present.
    let minutes = shift.elapsed_minutes().unwrap_or(0);
    tracing::info!(
        "🕔 Clock-out: user {} shift {} ({} min)",
        user_id,
        shift.id,
        minutes
    );
    Ok((shift, minutes))
}
