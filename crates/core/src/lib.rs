//! Chronicle domain crate.
//!
//! Pure logic only: post and user types, the form validation engine, and the
//! timeline filter. Nothing in here performs I/O.

pub mod error;
pub mod post;
pub mod timeline;
pub mod types;
pub mod user;
pub mod validation;
