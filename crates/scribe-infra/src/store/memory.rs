//! In-memory store implementation - used as fallback when Postgres is unavailable.

use async_trait::async_trait;

use scribe_core::domain::{Blog, Post};
use scribe_core::error::StoreError;
use scribe_core::ports::BlogStore;

/// Non-durable [`BlogStore`].
///
/// The aggregate itself lives in application state; this store only has to
/// answer the durability calls. Note: state is lost on process restart.
pub struct InMemoryBlogStore;

impl InMemoryBlogStore {
    pub fn new() -> Self {
        tracing::warn!("Using in-memory blog store - state will not survive restarts");
        Self
    }
}

impl Default for InMemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogStore for InMemoryBlogStore {
    async fn load(&self) -> Result<Option<Blog>, StoreError> {
        Ok(None)
    }

    async fn init(&self, blog: &Blog) -> Result<(), StoreError> {
        tracing::debug!(blog = blog.name(), "Initialized in-memory blog");
        Ok(())
    }

    async fn commit(&self, post: &Post, next_id: u64) -> Result<(), StoreError> {
        tracing::trace!(post_id = post.id, next_id, "Committed post (in-memory, no-op)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_load_is_always_empty() {
        let store = InMemoryBlogStore::new();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_init_and_commit_succeed() {
        let store = InMemoryBlogStore::new();
        let mut blog = Blog::new("Blogger", Uuid::new_v4());

        store.init(&blog).await.unwrap();

        let owner = blog.owner();
        let post = blog
            .create_post(owner, "My first post".to_string(), "Hello world!".to_string())
            .clone();
        store.commit(&post, blog.next_id()).await.unwrap();
    }
}
