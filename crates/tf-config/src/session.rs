//! Signed-in user supplied by the auth collaborator.

use serde::{Deserialize, Serialize};
use tf_core::enums::UserRole;
use tf_core::identity::SessionIdentity;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Opaque user id tasks are filtered by.
    #[serde(default)]
    pub user_id: String,

    /// Display name recorded on tasks this user assigns.
    #[serde(default)]
    pub user_name: String,

    #[serde(default)]
    pub role: UserRole,
}

impl SessionConfig {
    /// Whether a user id has been supplied.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.user_id.trim().is_empty()
    }

    /// Identity for the configured user, if any.
    #[must_use]
    pub fn identity(&self) -> Option<SessionIdentity> {
        if !self.is_configured() {
            return None;
        }
        let identity = SessionIdentity::new(self.user_id.trim(), self.role);
        if self.user_name.trim().is_empty() {
            Some(identity)
        } else {
            Some(identity.with_name(self.user_name.trim()))
        }
    }
}
