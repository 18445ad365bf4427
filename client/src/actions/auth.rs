//! Login, logout and registration against the `users` collection.
//!
//! ERROR HANDLING
//! ==============
//! Each action returns a typed error whose `Display` is the message shown to
//! the user. Remote failures are logged to the console before being returned.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::forms::login::{LoginForm, LoginInvalid};
use crate::forms::register::{RegisterField, RegisterForm, RegisterInvalid};
use crate::net::api;
use crate::net::client::RecordClient;
use crate::net::error::ApiError;
use crate::net::types::UserRecord;
use crate::state::session::SessionState;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Invalid(#[from] LoginInvalid),
    #[error("Login failed. Check your email and password.")]
    Rejected(ApiError),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error(transparent)]
    Invalid(#[from] RegisterInvalid),
    #[error("Email is already in use")]
    EmailTaken,
    #[error("Registration failed. Please try again.")]
    Failed(ApiError),
}

impl RegisterError {
    /// Field the message belongs under, or `None` for a form-level message.
    #[must_use]
    pub fn field(&self) -> Option<RegisterField> {
        match self {
            Self::Invalid(invalid) => Some(invalid.field()),
            Self::EmailTaken => Some(RegisterField::Email),
            Self::Failed(_) => None,
        }
    }
}

/// Authenticate with email + password and mark the session signed in.
///
/// The session is left untouched on failure.
///
/// # Errors
///
/// Returns [`LoginError::Invalid`] for blank fields (no request is made) and
/// [`LoginError::Rejected`] when the backend refuses the credentials.
pub async fn login<C: RecordClient + ?Sized>(
    client: &C,
    session: &mut SessionState,
    form: &LoginForm,
) -> Result<(), LoginError> {
    let (email, password) = form.credentials()?;
    match api::login(client, email, password).await {
        Ok(auth) => {
            session.sign_in(&auth);
            leptos::logging::log!("signed in as {}", auth.record.name);
            Ok(())
        }
        Err(err) => {
            leptos::logging::warn!("login failed: {err}");
            Err(LoginError::Rejected(err))
        }
    }
}

/// Clear the client's token store and the in-memory session.
pub fn logout<C: RecordClient + ?Sized>(client: &C, session: &mut SessionState) {
    client.clear_auth();
    session.sign_out();
}

/// Validate the registration form and create the user record.
///
/// # Errors
///
/// Returns [`RegisterError::Invalid`] for the first failing client-side rule
/// (no request is made), [`RegisterError::EmailTaken`] when the backend
/// rejects the email as a duplicate, and [`RegisterError::Failed`] otherwise.
pub async fn register<C: RecordClient + ?Sized>(client: &C, form: &RegisterForm) -> Result<UserRecord, RegisterError> {
    form.validate()?;
    match api::create_user(client, form.to_payload()).await {
        Ok(user) => Ok(user),
        Err(err) if err.is_not_unique("email") => Err(RegisterError::EmailTaken),
        Err(err) => {
            leptos::logging::error!("error registering user: {err}");
            Err(RegisterError::Failed(err))
        }
    }
}
