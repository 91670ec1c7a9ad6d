//! Process-wide in-memory storage for posts and users.
//!
//! [`MemoryStore`] owns the collections; the [`repositories`] expose the
//! operations handlers use, one unit struct per collection.

pub mod models;
pub mod repositories;

use std::sync::Arc;

use chronicle_core::post::Post;
use chronicle_core::user::User;
use parking_lot::RwLock;

/// Shared handle to the store, cloned into every request.
pub type StorePool = Arc<MemoryStore>;

/// Backing collections. Posts keep insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) posts: RwLock<Vec<Post>>,
    pub(crate) users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Create an empty shared store.
pub fn create_store() -> StorePool {
    Arc::new(MemoryStore::new())
}

/// Create a shared store pre-populated with `posts`, in order.
pub fn create_seeded_store(posts: impl IntoIterator<Item = Post>) -> StorePool {
    let store = MemoryStore::new();
    store.posts.write().extend(posts);
    tracing::debug!(count = store.posts.read().len(), "Seeded post store");
    Arc::new(store)
}
