//! Wire DTOs for the session backend.
//!
//! DESIGN
//! ======
//! The backend serializes more account fields than the landing UI needs;
//! only the consumed ones are modeled and unknown fields are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated account as returned by `GET /api/auth/profile/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend primary key, when present.
    #[serde(default)]
    pub id: Option<i64>,
    /// Login email, displayed verbatim.
    pub email: String,
    /// Whether the address has been confirmed through the verification link.
    #[serde(default)]
    pub is_email_verified: bool,
}

/// Body of `GET /api/auth/csrf/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CsrfTokenResponse {
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
}
