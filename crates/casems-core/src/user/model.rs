//! User identity model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Role of an authenticated identity. Every identity is an administrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
}

/// An authenticated identity.
///
/// This is also the JSON shape persisted in the session cache:
/// `{"id", "email", "name", "role"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            role: Role::Admin,
        }
    }

    /// An administrator with a freshly generated ID.
    pub fn generate(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), email, name)
    }
}
