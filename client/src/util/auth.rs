//! The auth collaborator shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls [`provide_auth`] once; pages call [`use_auth`] to read session
//! state and trigger logout. Only this module writes `AuthState`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api;
use crate::state::auth::AuthState;

/// Handle to the session state plus the operations that change it.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new(state: RwSignal<AuthState>) -> Self {
        Self { state }
    }

    /// Resolve the session from the backend. Any failure resolves as signed out.
    pub async fn refresh(self) {
        let user = api::fetch_current_user().await;
        self.state.set(AuthState::resolved(user));
    }

    /// End the backend session, clearing the user only once the backend agrees.
    ///
    /// # Errors
    ///
    /// Returns the backend error; state is left untouched in that case.
    pub async fn logout(self) -> Result<(), String> {
        self.logout_with(api::logout).await
    }

    pub(crate) async fn logout_with<F, Fut>(self, call: F) -> Result<(), String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), String>>,
    {
        call().await?;
        self.state.update(|s| s.user = None);
        Ok(())
    }
}

/// Create the session state, expose it as context, and start resolving it
/// in the browser.
pub fn provide_auth() -> AuthContext {
    let ctx = AuthContext::new(RwSignal::new(AuthState::pending()));
    provide_context(ctx);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(ctx.refresh());

    ctx
}

/// Fetch the auth collaborator provided by `App`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Run a logout once and swallow its failure after logging it.
///
/// The user gets no feedback on failure and nothing is retried.
// TODO: surface logout failures in the welcome panel instead of only logging them.
pub async fn handle_logout<F, Fut>(logout: F)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    if let Err(e) = logout().await {
        leptos::logging::error!("Logout failed: {e}");
    }
}
