use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

/// The signed-in user, as handed over by the auth collaborator.
///
/// Contains only data fields. The core uses `user_id` to filter tasks and
/// `role` to gate roster mutations.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: String,
    /// Display name, recorded as `assigned_by_name` on tasks this user assigns.
    pub name: Option<String>,
    pub role: UserRole,
}

impl SessionIdentity {
    #[must_use]
    pub fn new(user_id: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id: user_id.into(),
            name: None,
            role,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
