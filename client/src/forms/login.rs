//! Login form model.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginInvalid {
    #[error("Enter both email and password.")]
    MissingFields,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Trimmed email and raw password, provided both are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`LoginInvalid::MissingFields`] if either field is blank.
    pub fn credentials(&self) -> Result<(&str, &str), LoginInvalid> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(LoginInvalid::MissingFields);
        }
        Ok((email, self.password.as_str()))
    }
}
