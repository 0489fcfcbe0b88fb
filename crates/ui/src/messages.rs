//! Fixed user-facing status strings.

use showroom_domain::{CatalogAction, EntityKind, OperationStatus};

/// Shown after a successful login.
pub const LOGIN_SUCCESS: &str = "Successfully logged in!";

/// Shown when login fails, including the login that follows a registration.
pub const LOGIN_ERROR: &str = "Login error!";

/// Shown when registration fails.
pub const REGISTRATION_ERROR: &str = "Registration error!";

/// Maps the status of a collection to the message its view shows.
///
/// Pending operations, idle collections and successful fetches show nothing.
#[must_use]
pub fn status_message(kind: EntityKind, status: &OperationStatus) -> Option<String> {
    match status {
        OperationStatus::Idle
        | OperationStatus::Pending { .. }
        | OperationStatus::Succeeded {
            action: CatalogAction::Fetch,
        } => None,
        OperationStatus::Succeeded { action } => Some(format!("{} in {kind}!", past_tense(*action))),
        OperationStatus::Failed { action, .. } => Some(failure(*action).to_string()),
    }
}

const fn past_tense(action: CatalogAction) -> &'static str {
    match action {
        CatalogAction::Fetch => "Fetched",
        CatalogAction::Create => "Created",
        CatalogAction::Update => "Updated",
        CatalogAction::Delete => "Deleted",
    }
}

const fn failure(action: CatalogAction) -> &'static str {
    match action {
        CatalogAction::Fetch => "Get error!",
        CatalogAction::Create => "Create error!",
        CatalogAction::Update => "Update error!",
        CatalogAction::Delete => "Delete error!",
    }
}
