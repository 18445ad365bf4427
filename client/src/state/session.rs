//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided by the shell as `RwSignal<SessionState>`. It is set on successful
//! login and cleared on logout; nothing persists it, so a reload starts
//! signed out. The record client's token store mirrors it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::AuthResponse;

/// The signed-in user as far as the UI is concerned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Display name of the signed-in user, or `""` when signed out.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.name.as_str())
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    /// Record a successful password login.
    pub fn sign_in(&mut self, auth: &AuthResponse) {
        self.user = Some(SessionUser {
            id: auth.record.id.clone(),
            name: auth.record.name.clone(),
            email: auth.record.email.clone(),
        });
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}
