//! Authentication commands

use showroom_domain::{AccountCredentials, Credential, Profile};

/// An operation on the [`AuthStore`](super::AuthStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCommand {
    /// Exchange credentials for a token.
    Login(AccountCredentials),
    /// Create an account. Does not log in.
    Register(AccountCredentials),
    /// Load the authenticated user's profile.
    FetchProfile,
    /// Forget the stored credential and profile.
    Logout,
}

/// Successful result of an [`AuthCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// A token was issued and stored.
    LoggedIn(Credential),
    /// The account was created.
    Registered,
    /// The profile was loaded.
    Profile(Profile),
    /// The credential was cleared.
    LoggedOut,
}
