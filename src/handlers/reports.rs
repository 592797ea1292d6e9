use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::Result,
    period,
    services::reporting,
    state::AppState,
    validation::input::require_user_id,
};

/// The response payload for the per-user counters.
#[derive(Serialize)]
pub struct CounterResponse {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub horas: String,
}

/// One entry of a cross-user hours breakdown.
#[derive(Serialize)]
pub struct BreakdownEntry {
    pub nombre: String,
    pub horas: String,
}

fn to_breakdown(entries: Vec<(String, String)>) -> Vec<BreakdownEntry> {
    entries
        .into_iter()
        .map(|(nombre, horas)| BreakdownEntry { nombre, horas })
        .collect()
}

/// Hours one user has worked since the start of the current week.
#[axum::debug_handler]
pub async fn contador_semanal(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse> {
    let user_id = require_user_id(Some(user_id.as_str()))?;
    let since = period::week_start(Utc::now());
    let horas = reporting::user_hours_since(&state.db, &user_id, since).await?;
    Ok((StatusCode::OK, Json(CounterResponse { user_id, horas })))
}

/// Hours one user has worked since the start of the current month.
#[axum::debug_handler]
pub async fn contador_mensual(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse> {
    let user_id = require_user_id(Some(user_id.as_str()))?;
    let since = period::month_start(Utc::now());
    let horas = reporting::user_hours_since(&state.db, &user_id, since).await?;
    Ok((StatusCode::OK, Json(CounterResponse { user_id, horas })))
}

/// Per-user hours across all users for the current week.
#[axum::debug_handler]
pub async fn resumen_semanal(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let since = period::week_start(Utc::now());
    let entries = reporting::breakdown_since(&state.db, since).await?;
    Ok((StatusCode::OK, Json(to_breakdown(entries))))
}

/// Per-user hours across all users for the current month.
#[axum::debug_handler]
pub async fn resumen_mensual(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let since = period::month_start(Utc::now());
    let entries = reporting::breakdown_since(&state.db, since).await?;
    Ok((StatusCode::OK, Json(to_breakdown(entries))))
}
