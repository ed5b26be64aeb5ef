use async_trait::async_trait;

use crate::domain::{Blog, Post};
use crate::error::StoreError;

/// Persistence port for one blog's state.
///
/// The durable layout must retain the posts sequence and the id counter;
/// name and owner are metadata. Each `commit` is a single all-or-nothing
/// transaction, so no other operation ever observes a partial write.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Load the previously persisted blog, if one was initialized before.
    async fn load(&self) -> Result<Option<Blog>, StoreError>;

    /// Persist the metadata of a freshly created blog.
    async fn init(&self, blog: &Blog) -> Result<(), StoreError>;

    /// Durably record one post (insert or overwrite) together with the
    /// current id counter.
    async fn commit(&self, post: &Post, next_id: u64) -> Result<(), StoreError>;
}
