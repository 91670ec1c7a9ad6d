//! Repository layer for the in-memory store.
//!
//! Each repository is a zero-sized struct with associated functions that take
//! a `&MemoryStore`. No lock is held beyond a single call.

mod post_repo;
mod user_repo;

pub use post_repo::PostRepo;
pub use user_repo::UserRepo;
