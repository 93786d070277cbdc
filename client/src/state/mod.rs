//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is session state shared through context; `nav` is page-local UI
//! feedback that never leaves the landing page.

pub mod auth;
pub mod nav;
