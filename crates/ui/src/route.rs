//! Navigation targets.

use std::fmt;

/// A page of the admin client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Login and registration.
    Auth,
    /// The catalog main page.
    Vehicle,
}

impl Route {
    /// Path of the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Auth => "/",
            Self::Vehicle => "/vehicle",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
