//! Networking modules for the session backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the JSON schema they
//! exchange.

pub mod api;
pub mod types;
