//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session`] -- signed session tokens and the cookie that carries them.

pub mod password;
pub mod session;
