//! Employee roster kept by the auth collaborator.
//!
//! Unlike the task store, roster mutations are all-or-nothing: the new
//! collection is saved first and only then committed in memory, so a failed
//! write leaves both sides unchanged and reports the error.

use chrono::{DateTime, Utc};
use tf_core::entities::{NewEmployee, User};
use tf_core::enums::UserRole;
use tf_core::errors::CoreError;
use tf_core::identity::SessionIdentity;
use tf_core::ids::{PREFIX_USER, generate_id};

use crate::backend::{MemoryBackend, RecordBackend};
use crate::error::StoreError;

pub struct EmployeeRoster {
    users: Vec<User>,
    backend: Box<dyn RecordBackend<User>>,
}

impl EmployeeRoster {
    /// Load the roster. Unreadable data is logged and treated as empty.
    #[must_use]
    pub fn load(backend: Box<dyn RecordBackend<User>>) -> Self {
        let users = backend.load().unwrap_or_else(|error| {
            tracing::warn!(%error, source = %backend.describe(), "roster unreadable; starting empty");
            Vec::new()
        });
        Self { users, backend }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryBackend::new()))
    }

    /// Every user, admins included.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Users with the employee role, in roster order.
    #[must_use]
    pub fn employees(&self) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| u.role == UserRole::Employee)
            .collect()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Display name for `id`, if the user is known.
    #[must_use]
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(|u| u.name.as_str())
    }

    /// Employees whose name, email, or department contains `term`,
    /// ignoring case. An empty term matches everyone.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&User> {
        let term = term.trim();
        self.employees()
            .into_iter()
            .filter(|u| term.is_empty() || u.matches(term))
            .collect()
    }

    /// Add an employee on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// - `StoreError::Forbidden` if `actor` is not an admin.
    /// - `StoreError::Core(Validation)` if name or email is blank.
    /// - `StoreError::DuplicateUser` if the email is already on the roster.
    /// - Any persistence error; the roster is then left unchanged.
    pub fn add_employee(
        &mut self,
        actor: &SessionIdentity,
        fields: NewEmployee,
        now: DateTime<Utc>,
    ) -> Result<User, StoreError> {
        require_admin(actor, "adding an employee")?;

        let name = fields.name.trim();
        let email = fields.email.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("employee name must not be empty".into()).into());
        }
        if email.is_empty() {
            return Err(CoreError::Validation("employee email must not be empty".into()).into());
        }
        if self.users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(StoreError::DuplicateUser {
                email: email.to_string(),
            });
        }

        let user = User {
            id: generate_id(PREFIX_USER)?,
            name: name.to_string(),
            email: email.to_string(),
            password: fields.password,
            role: UserRole::Employee,
            department: fields.department,
            position: fields.position,
            created_at: now,
            created_by: Some(actor.user_id.clone()),
        };

        let mut next = self.users.clone();
        next.push(user.clone());
        self.commit(next)?;

        tracing::info!(id = %user.id, email = %user.email, "added employee");
        Ok(user)
    }

    /// Remove an employee on behalf of `actor`. Their tasks are left alone.
    ///
    /// # Errors
    ///
    /// - `StoreError::Forbidden` if `actor` is not an admin.
    /// - `StoreError::Core(NotFound)` if no employee has this id.
    /// - Any persistence error; the roster is then left unchanged.
    pub fn remove_employee(
        &mut self,
        actor: &SessionIdentity,
        id: &str,
    ) -> Result<User, StoreError> {
        require_admin(actor, "removing an employee")?;

        let index = self
            .users
            .iter()
            .position(|u| u.id == id && u.role == UserRole::Employee)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "employee".into(),
                id: id.to_string(),
            })?;

        let mut next = self.users.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        tracing::info!(id = %removed.id, "removed employee");
        Ok(removed)
    }

    fn commit(&mut self, next: Vec<User>) -> Result<(), StoreError> {
        self.backend.save(&next)?;
        self.users = next;
        Ok(())
    }
}

impl std::fmt::Debug for EmployeeRoster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeRoster")
            .field("users", &self.users.len())
            .field("backend", &self.backend.describe())
            .finish()
    }
}

fn require_admin(actor: &SessionIdentity, action: &str) -> Result<(), StoreError> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(StoreError::Forbidden {
            action: action.to_string(),
        })
    }
}
