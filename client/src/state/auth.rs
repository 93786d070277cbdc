//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the auth collaborator (`util::auth`); pages read it to pick
//! between the loading, signed-in and signed-out renderings.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `Default` is the resolved, signed-out state. The app starts from
/// [`AuthState::pending`] until the session lookup finishes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

/// Which of the three page renderings an [`AuthState`] selects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthView {
    Loading,
    Authenticated(User),
    Anonymous,
}

impl AuthState {
    /// Session status not yet known.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// A resolved state carrying the lookup result.
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    /// `loading` takes precedence over any user value.
    pub fn view(&self) -> AuthView {
        if self.loading {
            return AuthView::Loading;
        }
        match &self.user {
            Some(user) => AuthView::Authenticated(user.clone()),
            None => AuthView::Anonymous,
        }
    }
}
