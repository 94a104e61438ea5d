//! Request-authorization decision procedure.
//!
//! Pure functions from (principal, action, resource) to an allow/deny
//! decision. Handlers resolve the principal, ask here, and only then touch
//! the repositories. Menu items are role-gated shared state; bookings are
//! owner-scoped. Denials on owner-scoped records deliberately surface as
//! "not found" so a caller can never confirm that someone else's booking
//! exists.

use crate::domain::models::user::User;

/// The caller's resolved identity for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    Anonymous,
    Authenticated { user_id: i64, is_staff: bool },
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Principal::Authenticated {
            user_id: user.id,
            is_staff: user.is_staff,
        }
    }
}

impl Principal {
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Principal::Anonymous => None,
            Principal::Authenticated { user_id, .. } => Some(*user_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Retrieve,
    Create,
    Update,
    Delete,
}

impl Action {
    fn is_read(self) -> bool {
        matches!(self, Action::List | Action::Retrieve)
    }
}

/// Who may mutate the shared menu. Picked once per deployment via
/// MENU_WRITE_POLICY; the two variants differ in threat model and are never
/// merged at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuWritePolicy {
    /// Any authenticated user may create/update/delete menu items.
    AuthenticatedWrite,
    /// Only staff users may mutate; other authenticated users get 403.
    StaffWrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No valid credential on a route that needs one (401).
    AuthenticationRequired,
    /// Authenticated but lacking the staff role (403, staff variant only).
    InsufficientRole,
    /// The record does not exist as far as this caller is concerned (404),
    /// whether it is truly absent or owned by someone else.
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn allowed(self) -> Result<(), DenyReason> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(reason),
        }
    }
}

/// Menu items: readable by anyone, writable per the deployment's policy.
pub fn authorize_menu(principal: &Principal, action: Action, policy: MenuWritePolicy) -> Decision {
    if action.is_read() {
        return Decision::Allow;
    }

    match (principal, policy) {
        (Principal::Anonymous, _) => Decision::Deny(DenyReason::AuthenticationRequired),
        (Principal::Authenticated { .. }, MenuWritePolicy::AuthenticatedWrite) => Decision::Allow,
        (Principal::Authenticated { is_staff: true, .. }, MenuWritePolicy::StaffWrite) => {
            Decision::Allow
        }
        (Principal::Authenticated { is_staff: false, .. }, MenuWritePolicy::StaffWrite) => {
            Decision::Deny(DenyReason::InsufficientRole)
        }
    }
}

/// Bookings: authentication always required. `resource_owner` is the owner
/// of the record being touched (None for list/create, which target no
/// existing record). Touching a record owned by someone else is reported as
/// NotFound, never as a permission failure.
pub fn authorize_booking(
    principal: &Principal,
    action: Action,
    resource_owner: Option<i64>,
) -> Decision {
    let user_id = match principal.user_id() {
        Some(id) => id,
        None => return Decision::Deny(DenyReason::AuthenticationRequired),
    };

    match action {
        Action::List | Action::Create => Decision::Allow,
        Action::Retrieve | Action::Update | Action::Delete => match resource_owner {
            Some(owner) if owner == user_id => Decision::Allow,
            _ => Decision::Deny(DenyReason::NotFound),
        },
    }
}

/// The visible subset for booking list queries: always the caller's own
/// records, never the full table.
pub fn booking_scope(principal: &Principal) -> Result<i64, DenyReason> {
    principal.user_id().ok_or(DenyReason::AuthenticationRequired)
}
