use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

/// A roster user record as stored by the auth collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Credential stored alongside the record. Never rendered; see [`UserProfile`].
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl User {
    /// Credential-free view of this user.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            department: self.department.clone(),
            position: self.position.clone(),
            created_at: self.created_at,
        }
    }

    /// Case-insensitive match over name, email, and department.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.department.to_lowercase().contains(&term)
    }
}

/// A user without the credential field, safe to render.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: String,
    pub position: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by an admin when adding an employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
}
