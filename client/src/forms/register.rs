//! Registration form model and validation.
//!
//! Rules run in a fixed order and the first failure wins: email format, then
//! password confirmation, then password length.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::net::client::{FormPayload, Upload};

pub const MIN_PASSWORD_CHARS: usize = 8;

/// Field a validation message is rendered under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterField {
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegisterInvalid {
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
}

impl RegisterInvalid {
    #[must_use]
    pub fn field(self) -> RegisterField {
        match self {
            Self::InvalidEmail => RegisterField::Email,
            Self::PasswordMismatch => RegisterField::ConfirmPassword,
            Self::PasswordTooShort => RegisterField::Password,
        }
    }
}

/// Checks the `local@domain.tld` shape: no whitespace, exactly one `@`, and a
/// domain with a dot that has text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub avatar: Option<Upload>,
}

impl RegisterForm {
    /// Run the rules in order and report the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first rule that fails.
    pub fn validate(&self) -> Result<(), RegisterInvalid> {
        if !is_valid_email(self.email.trim()) {
            return Err(RegisterInvalid::InvalidEmail);
        }
        if self.password != self.confirm_password {
            return Err(RegisterInvalid::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(RegisterInvalid::PasswordTooShort);
        }
        Ok(())
    }

    /// Multipart fields for creating the user record.
    #[must_use]
    pub fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .text("email", self.email.trim())
            .text("password", self.password.clone())
            .text("passwordConfirm", self.confirm_password.clone())
            .text("name", self.name.trim())
            .file("avatar", self.avatar.clone())
    }
}
