//! Controlled form state for the login and signup pages.
//!
//! Validation mirrors the `required` attributes on the inputs so a submit
//! with blank fields never reaches the network.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{Credentials, RegisterRequest, Role};

pub const MISSING_CREDENTIALS: &str = "Name and password are required.";
pub const MISSING_ROLE: &str = "Select a role.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub name: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns a user-facing message when name or password is blank.
    pub fn validate(&self) -> Result<Credentials, &'static str> {
        if self.name.trim().is_empty() || self.password.trim().is_empty() {
            return Err(MISSING_CREDENTIALS);
        }
        Ok(Credentials { name: self.name.clone(), password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub password: String,
    pub role: Option<Role>,
}

impl SignupForm {
    /// # Errors
    ///
    /// Returns a user-facing message when a field is blank or no role is
    /// selected.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        if self.name.trim().is_empty() || self.password.trim().is_empty() {
            return Err(MISSING_CREDENTIALS);
        }
        let role = self.role.ok_or(MISSING_ROLE)?;
        Ok(RegisterRequest { name: self.name.clone(), password: self.password.clone(), role })
    }
}

/// Feedback shown above a form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub message: Option<String>,
    pub error: Option<String>,
    pub busy: bool,
}

impl FormStatus {
    /// Clear prior feedback and mark a request in flight.
    pub fn begin(&mut self) {
        self.message = None;
        self.error = None;
        self.busy = true;
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.error = None;
        self.busy = false;
    }

    pub fn fail(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.message = None;
        self.busy = false;
    }
}
