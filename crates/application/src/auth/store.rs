//! Authentication store: profile, last failure and the issued credential.

use std::sync::Arc;

use showroom_domain::{AccountCredentials, AuthError, AuthState, Credential, Profile, TokenResponse};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{AuthCommand, AuthOutcome};
use crate::{CredentialStore, HttpError, HttpMethod, HttpResult, Transport};

const LOGIN_PATH: &str = "api/auth/";
const REGISTER_PATH: &str = "api/create/";
const PROFILE_PATH: &str = "api/profile/";

/// Owns the authentication state and the credential lifecycle.
///
/// State changes are published through a `watch` channel; views call
/// [`subscribe`](Self::subscribe) and re-render on every change.
///
/// Failures of `login` and `register` overwrite the recorded [`AuthError`].
/// A later success does not clear it; the view decides when a stale error
/// stops mattering.
pub struct AuthStore<T: Transport> {
    transport: Arc<T>,
    credentials: Arc<dyn CredentialStore>,
    state: watch::Sender<AuthState>,
}

impl<T: Transport> AuthStore<T> {
    /// Creates a store with an empty profile and no recorded error.
    pub fn new(transport: Arc<T>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            transport,
            credentials,
            state: watch::Sender::new(AuthState::default()),
        }
    }

    /// Current state.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Current profile.
    #[must_use]
    pub fn profile(&self) -> Profile {
        self.state.borrow().profile.clone()
    }

    /// Last recorded failure.
    #[must_use]
    pub fn error(&self) -> AuthError {
        self.state.borrow().error.clone()
    }

    /// Receives every subsequent state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Runs one command.
    ///
    /// # Errors
    ///
    /// Returns the failure of the underlying operation.
    pub async fn dispatch(&self, command: AuthCommand) -> HttpResult<AuthOutcome> {
        match command {
            AuthCommand::Login(account) => {
                self.login(&account.username, &account.password)
                    .await
                    .map(AuthOutcome::LoggedIn)
            }
            AuthCommand::Register(account) => self
                .register(&account.username, &account.password)
                .await
                .map(|()| AuthOutcome::Registered),
            AuthCommand::FetchProfile => self.fetch_profile().await.map(AuthOutcome::Profile),
            AuthCommand::Logout => self.logout().await.map(|()| AuthOutcome::LoggedOut),
        }
    }

    /// Exchanges username and password for a credential and stores it.
    ///
    /// Does not fetch the profile.
    ///
    /// # Errors
    ///
    /// Returns the request failure, a malformed token response, or a failure
    /// to persist the credential. Each is also recorded as the [`AuthError`].
    pub async fn login(&self, username: &str, password: &str) -> HttpResult<Credential> {
        debug!(username, "logging in");
        let result = self.try_login(username, password).await;
        match &result {
            Ok(_) => info!(username, "login succeeded"),
            Err(error) => {
                warn!(username, %error, "login failed");
                self.record_error(error);
            }
        }
        result
    }

    async fn try_login(&self, username: &str, password: &str) -> HttpResult<Credential> {
        let body = account_body(username, password)?;
        let response = self
            .transport
            .request(HttpMethod::Post, LOGIN_PATH, Some(body), false)
            .await?;

        let token: TokenResponse =
            serde_json::from_value(response).map_err(|e| HttpError::Decode(e.to_string()))?;
        let credential = Credential::from(token);

        self.credentials.set(credential.clone()).await?;
        Ok(credential)
    }

    /// Creates an account. Callers log in separately on success.
    ///
    /// # Errors
    ///
    /// Returns the request failure, which is also recorded as the
    /// [`AuthError`].
    pub async fn register(&self, username: &str, password: &str) -> HttpResult<()> {
        debug!(username, "registering account");
        let result = self.try_register(username, password).await;
        match &result {
            Ok(()) => info!(username, "account registered"),
            Err(error) => {
                warn!(username, %error, "registration failed");
                self.record_error(error);
            }
        }
        result
    }

    async fn try_register(&self, username: &str, password: &str) -> HttpResult<()> {
        let body = account_body(username, password)?;
        self.transport
            .request(HttpMethod::Post, REGISTER_PATH, Some(body), false)
            .await?;
        Ok(())
    }

    /// Loads the profile of the user the stored credential belongs to.
    ///
    /// On failure the previous profile is kept and no error is recorded.
    ///
    /// # Errors
    ///
    /// Returns the request or decode failure.
    pub async fn fetch_profile(&self) -> HttpResult<Profile> {
        let result = self.try_fetch_profile().await;
        match &result {
            Ok(profile) => {
                debug!(id = profile.id, username = %profile.username, "profile loaded");
                let profile = profile.clone();
                self.state.send_modify(|state| state.profile = profile);
            }
            Err(error) => warn!(%error, "profile fetch failed"),
        }
        result
    }

    async fn try_fetch_profile(&self) -> HttpResult<Profile> {
        let response = self
            .transport
            .request(HttpMethod::Get, PROFILE_PATH, None, true)
            .await?;
        serde_json::from_value(response).map_err(|e| HttpError::Decode(e.to_string()))
    }

    /// Clears the stored credential and resets the profile.
    ///
    /// The recorded error is left as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential store cannot be cleared.
    pub async fn logout(&self) -> HttpResult<()> {
        self.credentials.clear().await?;
        self.state.send_modify(|state| state.profile = Profile::default());
        info!("logged out");
        Ok(())
    }

    fn record_error(&self, error: &HttpError) {
        let error = AuthError::from(error);
        self.state.send_modify(|state| state.error = error);
    }
}

fn account_body(username: &str, password: &str) -> HttpResult<serde_json::Value> {
    serde_json::to_value(AccountCredentials::new(username, password))
        .map_err(|e| HttpError::InvalidRequest(e.to_string()))
}
