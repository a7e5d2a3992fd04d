//! Account personas and the routes each one owns.

#[cfg(test)]
#[path = "persona_test.rs"]
mod persona_test;

use serde::{Deserialize, Serialize};

/// Rider or driver account type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    #[default]
    Rider,
    Driver,
}

impl Persona {
    #[must_use]
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Rider => "/user/login",
            Self::Driver => "/driver/login",
        }
    }

    #[must_use]
    pub fn register_path(self) -> &'static str {
        match self {
            Self::Rider => "/user/register",
            Self::Driver => "/driver/register",
        }
    }

    #[must_use]
    pub fn profile_path(self) -> &'static str {
        match self {
            Self::Rider => "/user/profile",
            Self::Driver => "/driver/profile",
        }
    }

    /// Where a successful login lands.
    #[must_use]
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Rider => "/map",
            Self::Driver => "/driver/profile",
        }
    }

    /// Path segment used by the auth service (`/users/...`, `/drivers/...`).
    #[must_use]
    pub fn api_segment(self) -> &'static str {
        match self {
            Self::Rider => "users",
            Self::Driver => "drivers",
        }
    }

    #[must_use]
    pub fn account_label(self) -> &'static str {
        match self {
            Self::Rider => "Rider Account",
            Self::Driver => "Driver Account",
        }
    }
}
