//! Repository for the post collection.

use chronicle_core::post::{Period, Post};
use chronicle_core::timeline::filter_posts_at;
use chronicle_core::types::Timestamp;
use uuid::Uuid;

use crate::models::post::CreatePost;
use crate::MemoryStore;

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post with a freshly generated id, returning it.
    pub fn create(store: &MemoryStore, input: CreatePost) -> Post {
        let post = Post {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            author_id: input.author_id,
            created: input.created,
            markdown: input.markdown,
            html: input.html,
        };
        store.posts.write().push(post.clone());
        post
    }

    /// Find a post by id.
    pub fn find_by_id(store: &MemoryStore, id: &str) -> Option<Post> {
        store.posts.read().iter().find(|p| p.id == id).cloned()
    }

    /// All posts in insertion order.
    pub fn list(store: &MemoryStore) -> Vec<Post> {
        store.posts.read().clone()
    }

    /// Posts created within `period` of `now`, in insertion order.
    pub fn list_in_period(store: &MemoryStore, period: Period, now: Timestamp) -> Vec<Post> {
        let posts = store.posts.read();
        filter_posts_at(posts.iter(), period, now)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Replace the post whose id matches `post.id`, keeping its position.
    ///
    /// Returns `None` if no such post exists.
    pub fn replace(store: &MemoryStore, post: Post) -> Option<Post> {
        let mut posts = store.posts.write();
        let slot = posts.iter_mut().find(|p| p.id == post.id)?;
        *slot = post.clone();
        Some(post)
    }

    pub fn count(store: &MemoryStore) -> usize {
        store.posts.read().len()
    }
}
