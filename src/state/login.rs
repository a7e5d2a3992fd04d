//! Login form draft shared by the rider and driver sign-in pages.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::LoginRequest;
use crate::state::registration::{Field, FieldErrors};
use crate::util::validate;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.check(Field::Email, validate::email(self.email.trim()));
        errors.check(Field::Password, validate::required(&self.password, "Password is required"));
        errors
    }

    /// Validate, and on success build the login request.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldErrors`] map when the email or password is invalid.
    pub fn prepare_submission(&self) -> Result<LoginRequest, FieldErrors> {
        let errors = self.validate();
        if !errors.is_valid() {
            return Err(errors);
        }
        Ok(LoginRequest { email: self.email.trim().to_owned(), password: self.password.clone() })
    }
}
