// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use crate::error::AuthError;

/// Actor roles for authorization.
///
/// Roles determine what actions an authenticated actor may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Student role: applicants acting on their own applications.
    ///
    /// Students may:
    /// - submit new applications
    /// - read their applications, timelines, and progress
    Student,
    /// Admin role: university staff with review authority.
    ///
    /// Admins may:
    /// - move applications through the review pipeline
    /// - read any application
    Admin,
    /// Agent role: education agents acting on behalf of students.
    ///
    /// Agents may submit applications for the students they represent
    /// and update statuses during document handling.
    Agent,
}

impl Role {
    /// Returns the lowercase role name used in logs and audit trails.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
            Self::Agent => "agent",
        }
    }
}

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }
}

/// Stub authentication function.
///
/// This is a minimal placeholder. It does NOT implement real
/// authentication; credential checks and session handling are deferred
/// to the identity provider integration.
///
/// # Arguments
///
/// * `actor_id` - The identifier of the actor to authenticate
/// * `role` - The role to assign to the actor
///
/// # Errors
///
/// Returns an error if the actor ID is empty.
pub fn authenticate_stub(actor_id: String, role: Role) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(actor_id, role))
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor is authorized to submit an application.
    ///
    /// Students submit their own applications; agents submit on behalf
    /// of students. Admins review, they do not submit.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have a submitting role.
    pub fn authorize_submit_application(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Student | Role::Agent => Ok(()),
            Role::Admin => Err(AuthError::Unauthorized {
                action: String::from("submit_application"),
                required_role: String::from("Student or Agent"),
            }),
        }
    }

    /// Checks if an actor is authorized to update an application status.
    ///
    /// Only Admin and Agent actors may move applications through the
    /// pipeline; students never change their own status.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have a reviewing role.
    pub fn authorize_update_status(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin | Role::Agent => Ok(()),
            Role::Student => Err(AuthError::Unauthorized {
                action: String::from("update_status"),
                required_role: String::from("Admin or Agent"),
            }),
        }
    }

    /// Checks if an actor is authorized to list all applications.
    ///
    /// Only Admin and Agent actors see the full list.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Returns an error if the actor may only read single applications.
    pub fn authorize_list_applications(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin | Role::Agent => Ok(()),
            Role::Student => Err(AuthError::Unauthorized {
                action: String::from("list_applications"),
                required_role: String::from("Admin or Agent"),
            }),
        }
    }

    /// Checks if an actor is authorized to read a single application,
    /// its timeline, or its progress.
    ///
    /// Every role may read.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other checks.
    pub const fn authorize_read_application(_actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: Role) -> AuthenticatedActor {
        AuthenticatedActor::new(String::from("actor-1"), role)
    }

    #[test]
    fn test_authenticate_stub_rejects_empty_id() {
        let result = authenticate_stub(String::new(), Role::Student);
        assert!(matches!(
            result,
            Err(AuthError::AuthenticationFailed { .. })
        ));
    }

    #[test]
    fn test_students_and_agents_may_submit() {
        assert!(AuthorizationService::authorize_submit_application(&actor(Role::Student)).is_ok());
        assert!(AuthorizationService::authorize_submit_application(&actor(Role::Agent)).is_ok());
        assert!(AuthorizationService::authorize_submit_application(&actor(Role::Admin)).is_err());
    }

    #[test]
    fn test_students_may_not_update_status() {
        assert!(AuthorizationService::authorize_update_status(&actor(Role::Admin)).is_ok());
        assert!(AuthorizationService::authorize_update_status(&actor(Role::Agent)).is_ok());

        let denied = AuthorizationService::authorize_update_status(&actor(Role::Student));
        assert!(matches!(denied, Err(AuthError::Unauthorized { .. })));
    }

    #[test]
    fn test_only_staff_list_applications() {
        assert!(AuthorizationService::authorize_list_applications(&actor(Role::Admin)).is_ok());
        assert!(AuthorizationService::authorize_list_applications(&actor(Role::Student)).is_err());
    }

    #[test]
    fn test_everyone_may_read() {
        assert!(AuthorizationService::authorize_read_application(&actor(Role::Student)).is_ok());
        assert!(AuthorizationService::authorize_read_application(&actor(Role::Admin)).is_ok());
        assert!(AuthorizationService::authorize_read_application(&actor(Role::Agent)).is_ok());
    }
}
