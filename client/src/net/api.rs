//! REST helpers for the session backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending
//! credentials so the session cookie travels cross-origin.
//! Server-side (SSR): stubs returning `None`/error since the session only
//! exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a missing or
//! broken backend degrades the page to the anonymous view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
#[cfg(feature = "hydrate")]
use super::types::CsrfTokenResponse;

pub const PROFILE_PATH: &str = "/api/auth/profile/";
pub const CSRF_PATH: &str = "/api/auth/csrf/";
pub const LOGOUT_PATH: &str = "/api/auth/logout/";

/// Header the backend checks against its CSRF cookie on unsafe methods.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Backend origin baked in at build time; empty means same origin.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("AUTH_API_BASE").unwrap_or("")
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn csrf_failed_message(status: u16) -> String {
    format!("csrf request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_failed_message(status: u16) -> String {
    format!("logout failed: {status}")
}

/// Fetch the currently authenticated user.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(api_base(), PROFILE_PATH))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch a CSRF token; the backend also sets the matching cookie.
///
/// # Errors
///
/// Returns an error string if the request fails or the status is not OK.
pub async fn fetch_csrf_token() -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(api_base(), CSRF_PATH))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(csrf_failed_message(resp.status()));
        }
        let body: CsrfTokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.csrf_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// End the backend session with `POST /api/auth/logout/`.
///
/// # Errors
///
/// Returns an error string if the CSRF token cannot be obtained, the request
/// fails, or the backend responds with a non-OK status.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let token = fetch_csrf_token().await?;
        let resp = gloo_net::http::Request::post(&endpoint(api_base(), LOGOUT_PATH))
            .credentials(web_sys::RequestCredentials::Include)
            .header(CSRF_HEADER, &token)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(logout_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
