use serde::Serialize;
use uuid::Uuid;

/// Represents a user in the system.
///
/// Created on first login by name and immutable afterward. The JSON shape
/// keeps the original API's Spanish field name.
#[derive(Clone, Debug, Serialize)]
pub struct User {
    /// The unique identifier for the user.
    pub id: Uuid,
    /// The user's display name, unique across the system.
    #[serde(rename = "nombre")]
    pub name: String,
}
