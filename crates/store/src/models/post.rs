use chronicle_core::types::{EntityId, Timestamp};

/// DTO for inserting a post.
#[derive(Debug, Clone)]
pub struct CreatePost {
    pub title: String,
    pub author_id: EntityId,
    pub created: Timestamp,
    pub markdown: String,
    pub html: String,
}
