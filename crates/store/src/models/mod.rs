//! Insert DTOs for the store.
//!
//! Entity types live in `chronicle_core`; these carry the fields a caller
//! supplies before the store assigns an id.

pub mod post;
pub mod user;
