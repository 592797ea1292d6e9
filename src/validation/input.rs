use uuid::Uuid;
use crate::error::{AppError, Result};

/// Validates the display name from a login payload.
///
/// # Arguments
///
/// * `name` - The name field as it arrived, if it arrived.
///
/// # Returns
///
/// A `Result` containing the validated name.
pub fn require_name(name: Option<&str>) -> Result<&str> {
    let name = match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(AppError::Validation("Nombre requerido".to_string())),
    };

    if name.len() > 255 {
        return Err(AppError::Validation(
            "Nombre demasiado largo".to_string(),
        ));
    }

    Ok(name)
}

/// Validates and parses a user identifier.
///
/// # Arguments
///
/// * `raw` - The userId field as it arrived, if it arrived.
///
/// # Returns
///
/// A `Result` containing the parsed identifier.
pub fn require_user_id(raw: Option<&str>) -> Result<Uuid> {
    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => return Err(AppError::Validation("userId requerido".to_string())),
    };

    Uuid::parse_str(raw).map_err(|_| AppError::Validation("userId inválido".to_string()))
}
