use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::Result,
    models::shift::Shift,
    services::{reporting, tracking},
    state::AppState,
    validation::input::require_user_id,
};

/// The request payload for clock-in and clock-out.
#[derive(Deserialize, Debug)]
pub struct ClockRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// The response payload for a successful clock-in.
#[derive(Serialize)]
pub struct ClockInResponse {
    pub success: bool,
    pub registro: Shift,
}

/// The response payload for a successful clock-out.
#[derive(Serialize)]
pub struct ClockOutResponse {
    pub success: bool,
    pub registro: Shift,
    pub minutos: i64,
}

/// One row of the full shift listing.
#[derive(Serialize)]
pub struct RecordResponse {
    pub id: Uuid,
    pub nombre: String,
    pub entrada: DateTime<Utc>,
    pub salida: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiempo_total: Option<String>,
}

/// Handles clock-in for a user.
#[axum::debug_handler]
pub async fn entrada(
    State(state): State<AppState>,
    Json(payload): Json<ClockRequest>,
) -> Result<impl IntoResponse> {
    let user_id = require_user_id(payload.user_id.as_deref())?;
    let registro = tracking::clock_in(&state.db, &user_id).await?;

    let response = ClockInResponse {
        success: true,
        registro,
    };
    Ok((StatusCode::OK, Json(response)))
}

/// Handles clock-out for a user.
#[axum::debug_handler]
pub async fn salida(
    State(state): State<AppState>,
    Json(payload): Json<ClockRequest>,
) -> Result<impl IntoResponse> {
    let user_id = require_user_id(payload.user_id.as_deref())?;
    let (registro, minutos) = tracking::clock_out(&state.db, &user_id).await?;

    let response = ClockOutResponse {
        success: true,
        registro,
        minutos,
    };
    Ok((StatusCode::OK, Json(response)))
}

/// Lists every shift with its owner's name, newest first.
#[axum::debug_handler]
pub async fn registros(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let records = reporting::all_records(&state.db).await?;

    let response: Vec<RecordResponse> = records
        .into_iter()
        .map(|entry| RecordResponse {
            tiempo_total: entry.shift.elapsed_hours().map(reporting::format_hours),
            id: entry.shift.id,
            nombre: entry.user_name,
            entrada: entry.shift.started_at,
            salida: entry.shift.ended_at,
        })
        .collect();

    Ok((StatusCode::OK, Json(response)))
}
