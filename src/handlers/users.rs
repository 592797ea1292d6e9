use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::Result,
    services::tracking,
    state::AppState,
    validation::input::require_name,
};

/// The request payload for login by display name.
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub nombre: Option<String>,
}

/// Handles login: returns the user with the given name, creating it on
/// first sight.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let name = require_name(payload.nombre.as_deref())?;
    let user = tracking::login(&state.db, name).await?;
    Ok((StatusCode::OK, Json(user)))
}
