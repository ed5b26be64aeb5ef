use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a single record in the blog's post store.
///
/// Ids are assigned sequentially by [`super::Blog`] and never reused. The
/// author is fixed at creation; `published_at` stays 0 until the first
/// publish and is never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: Uuid,
    pub published: bool,
    pub published_at: i64,
}

impl Post {
    /// Create a new unpublished post.
    pub fn new(id: u64, author: Uuid, title: String, content: String) -> Self {
        Self {
            id,
            title,
            content,
            author,
            published: false,
            published_at: 0,
        }
    }
}
