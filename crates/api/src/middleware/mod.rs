//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the user behind a valid session cookie.

pub mod auth;
