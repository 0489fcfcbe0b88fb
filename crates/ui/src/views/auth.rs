//! Login and registration form.

use std::sync::Arc;

use showroom_application::{AuthStore, Transport};
use tracing::debug;

use crate::messages::{LOGIN_ERROR, LOGIN_SUCCESS, REGISTRATION_ERROR};
use crate::route::Route;

/// Whether the form logs in or creates an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Log in with existing credentials.
    #[default]
    Login,
    /// Create an account, then log in with it.
    Register,
}

impl AuthMode {
    /// Label of the submit button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }
}

/// State of the auth page.
pub struct AuthView<T: Transport> {
    store: Arc<AuthStore<T>>,
    /// Username input.
    pub username: String,
    /// Password input.
    pub password: String,
    mode: AuthMode,
    message: Option<&'static str>,
}

impl<T: Transport> AuthView<T> {
    /// Creates an empty form in login mode.
    pub const fn new(store: Arc<AuthStore<T>>) -> Self {
        Self {
            store,
            username: String::new(),
            password: String::new(),
            mode: AuthMode::Login,
            message: None,
        }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switches between login and register. Does not touch the store.
    pub const fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
    }

    /// Last status message.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        self.message
    }

    /// Submits the form.
    ///
    /// In register mode a successful registration is followed by a login
    /// with the same credentials. Returns the page to navigate to, which is
    /// only ever [`Route::Vehicle`] after a successful login.
    pub async fn submit(&mut self) -> Option<Route> {
        if self.mode == AuthMode::Register {
            debug!(username = %self.username, "submitting registration");
            if self
                .store
                .register(&self.username, &self.password)
                .await
                .is_err()
            {
                self.message = Some(REGISTRATION_ERROR);
                return None;
            }
        }

        self.login().await
    }

    async fn login(&mut self) -> Option<Route> {
        match self.store.login(&self.username, &self.password).await {
            Ok(_) => {
                self.message = Some(LOGIN_SUCCESS);
                Some(Route::Vehicle)
            }
            Err(_) => {
                self.message = Some(LOGIN_ERROR);
                None
            }
        }
    }
}
