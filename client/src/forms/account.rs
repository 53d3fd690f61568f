//! Login, registration, profile and password forms.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use super::{FormErrors, optional, required};
use crate::net::types::{LoginPayload, PasswordPayload, ProfilePayload, RegisterPayload, User};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const INVALID_EMAIL: &str = "Enter a valid email";
pub const SHORT_PASSWORD: &str = "Password must have at least 8 characters";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const SAME_PASSWORD: &str = "New password must differ from the current one";

fn email(errors: &mut FormErrors, field: &'static str, raw: &str) -> String {
    let value = required(errors, field, raw);
    if !value.is_empty() && !value.contains('@') {
        errors.add(field, INVALID_EMAIL);
    }
    value
}

/// Passwords are never trimmed.
fn new_password(errors: &mut FormErrors, field: &'static str, raw: &str) {
    if raw.is_empty() {
        errors.add(field, super::REQUIRED);
    } else if raw.chars().count() < MIN_PASSWORD_LEN {
        errors.add(field, SHORT_PASSWORD);
    }
}

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns per-field messages for a blank/invalid email or blank password.
    pub fn validate(&self) -> Result<LoginPayload, FormErrors> {
        let mut errors = FormErrors::default();
        let email = email(&mut errors, "email", &self.email);
        if self.password.is_empty() {
            errors.add("password", super::REQUIRED);
        }
        errors.finish(|| LoginPayload { email, password: self.password.clone() })
    }
}

// =============================================================================
// REGISTER
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub crmv: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns per-field messages for missing fields, a short password, or a
    /// confirmation mismatch.
    pub fn validate(&self) -> Result<RegisterPayload, FormErrors> {
        let mut errors = FormErrors::default();
        let name = required(&mut errors, "name", &self.name);
        let email = email(&mut errors, "email", &self.email);
        new_password(&mut errors, "password", &self.password);
        if self.confirm_password != self.password {
            errors.add("confirm_password", PASSWORD_MISMATCH);
        }
        errors.finish(|| RegisterPayload {
            name,
            email,
            crmv: optional(&self.crmv),
            phone: optional(&self.phone),
            password: self.password.clone(),
        })
    }
}

// =============================================================================
// PROFILE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub crmv: String,
    pub phone: String,
}

impl ProfileForm {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            crmv: user.crmv.clone().unwrap_or_default(),
            phone: user.phone.clone().unwrap_or_default(),
        }
    }

    /// # Errors
    ///
    /// Returns per-field messages for a blank name or invalid email.
    pub fn validate(&self) -> Result<ProfilePayload, FormErrors> {
        let mut errors = FormErrors::default();
        let name = required(&mut errors, "name", &self.name);
        let email = email(&mut errors, "email", &self.email);
        errors.finish(|| ProfilePayload { name, email, crmv: optional(&self.crmv), phone: optional(&self.phone) })
    }
}

// =============================================================================
// PASSWORD
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current: String,
    pub new_password: String,
    pub confirm: String,
}

impl PasswordForm {
    /// # Errors
    ///
    /// Returns per-field messages for a missing current password, a short or
    /// unchanged new password, or a confirmation mismatch.
    pub fn validate(&self) -> Result<PasswordPayload, FormErrors> {
        let mut errors = FormErrors::default();
        if self.current.is_empty() {
            errors.add("current", super::REQUIRED);
        }
        new_password(&mut errors, "new_password", &self.new_password);
        if !self.current.is_empty() && self.new_password == self.current {
            errors.add("new_password", SAME_PASSWORD);
        }
        if self.confirm != self.new_password {
            errors.add("confirm", PASSWORD_MISMATCH);
        }
        errors.finish(|| PasswordPayload {
            current_password: self.current.clone(),
            new_password: self.new_password.clone(),
        })
    }
}
