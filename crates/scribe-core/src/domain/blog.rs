use chrono::Utc;
use uuid::Uuid;

use crate::error::DomainError;

use super::Post;

/// Blog aggregate - one named post store and its operation surface.
///
/// Posts are kept in creation order and ids are handed out sequentially
/// starting at 1, never reused. All mutating operations are all-or-nothing:
/// a `NotFound` or `Unauthorized` outcome leaves the aggregate untouched.
#[derive(Debug, Clone)]
pub struct Blog {
    name: String,
    owner: Uuid,
    posts: Vec<Post>,
    next_id: u64,
}

impl Blog {
    /// Create an empty blog owned by the instantiating caller.
    ///
    /// The owner is recorded for administrative purposes only; it does not
    /// gate any post operation.
    pub fn new(name: impl Into<String>, owner: Uuid) -> Self {
        Self {
            name: name.into(),
            owner,
            posts: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a blog from persisted state.
    ///
    /// `posts` must be in creation order and `next_id` must be the counter
    /// value that was persisted alongside them.
    pub fn restore(name: String, owner: Uuid, posts: Vec<Post>, next_id: u64) -> Self {
        Self {
            name,
            owner,
            posts,
            next_id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> Uuid {
        self.owner
    }

    /// The id the next created post will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Create a new unpublished post authored by `caller`.
    ///
    /// Always succeeds; title and content are stored as given, empty or not.
    pub fn create_post(&mut self, caller: Uuid, title: String, content: String) -> &Post {
        let post = Post::new(self.next_id, caller, title, content);
        self.next_id += 1;

        let idx = self.posts.len();
        self.posts.push(post);
        &self.posts[idx]
    }

    /// Overwrite title and content of an existing post.
    ///
    /// Only the post's author may update it; id, author and publication
    /// state are left unchanged.
    pub fn update_post(
        &mut self,
        caller: Uuid,
        id: u64,
        title: String,
        content: String,
    ) -> Result<&Post, DomainError> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| DomainError::missing_id(id))?;

        if self.posts[idx].author != caller {
            return Err(DomainError::Unauthorized { caller, id });
        }

        let post = &mut self.posts[idx];
        post.title = title;
        post.content = content;

        Ok(&self.posts[idx])
    }

    /// Mark a post as published.
    ///
    /// Publishing is open to any caller, not just the author. The first
    /// publish stamps `published_at`; re-publishing an already published
    /// post is a no-op and keeps the original timestamp.
    pub fn publish_post(&mut self, _caller: Uuid, id: u64) -> Result<&Post, DomainError> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| DomainError::missing_id(id))?;

        let post = &mut self.posts[idx];
        if !post.published {
            post.published = true;
            post.published_at = Utc::now().timestamp();
        }

        Ok(&self.posts[idx])
    }

    /// All posts in creation order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a post by id.
    pub fn post_by_id(&self, id: u64) -> Result<&Post, DomainError> {
        self.index_of(id)
            .map(|idx| &self.posts[idx])
            .ok_or_else(|| DomainError::missing_id(id))
    }

    /// Look up the first post whose content matches `content` exactly.
    ///
    /// "First" means earliest creation (lowest id); content carries no
    /// uniqueness constraint.
    pub fn post_by_content(&self, content: &str) -> Result<&Post, DomainError> {
        self.posts
            .iter()
            .find(|post| post.content == content)
            .ok_or_else(|| DomainError::missing_content(content))
    }

    /// All posts authored by `author`, in creation order.
    ///
    /// An author with no posts gets an empty list, not an error.
    pub fn posts_by_author(&self, author: Uuid) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| post.author == author)
            .collect()
    }

    fn index_of(&self, id: u64) -> Option<usize> {
        self.posts.iter().position(|post| post.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog_with_owner() -> (Blog, Uuid) {
        let owner = Uuid::new_v4();
        (Blog::new("Blogger", owner), owner)
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let (mut blog, owner) = blog_with_owner();

        for expected in 1..=5u64 {
            let id = blog
                .create_post(owner, format!("Post {expected}"), "text".to_string())
                .id;
            assert_eq!(id, expected);
        }

        let ids: Vec<u64> = blog.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(blog.next_id(), 6);
    }

    #[test]
    fn test_create_then_fetch_by_id() {
        let (mut blog, owner) = blog_with_owner();

        blog.create_post(owner, "My first post".to_string(), "Hello world!".to_string());

        let post = blog.post_by_id(1).unwrap();
        assert_eq!(post.title, "My first post");
        assert_eq!(post.content, "Hello world!");
        assert_eq!(post.author, owner);
        assert!(!post.published);
        assert_eq!(post.published_at, 0);
    }

    #[test]
    fn test_update_by_author() {
        let (mut blog, owner) = blog_with_owner();

        blog.create_post(owner, "My first post".to_string(), "Hello world!".to_string());
        blog.update_post(
            owner,
            1,
            "My first post updated".to_string(),
            "Goodbye world!".to_string(),
        )
        .unwrap();

        let post = blog.post_by_id(1).unwrap();
        assert_eq!(post.title, "My first post updated");
        assert_eq!(post.content, "Goodbye world!");
        assert_eq!(post.id, 1);
        assert_eq!(post.author, owner);
        assert!(!post.published);
        assert_eq!(post.published_at, 0);
    }

    #[test]
    fn test_update_unknown_id() {
        let (mut blog, owner) = blog_with_owner();

        let err = blog
            .update_post(owner, 7, "t".to_string(), "c".to_string())
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn test_update_by_non_author_rejected() {
        let (mut blog, owner) = blog_with_owner();
        let stranger = Uuid::new_v4();

        blog.create_post(owner, "My first post".to_string(), "Hello world!".to_string());
        let before = blog.post_by_id(1).unwrap().clone();

        let err = blog
            .update_post(stranger, 1, "Hijacked".to_string(), "Nope".to_string())
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::Unauthorized {
                caller: stranger,
                id: 1
            }
        );

        assert_eq!(blog.post_by_id(1).unwrap(), &before);
    }

    #[test]
    fn test_publish_sets_timestamp_once() {
        let (mut blog, owner) = blog_with_owner();

        blog.create_post(owner, "My first post".to_string(), "Hello world!".to_string());

        let first = blog.publish_post(owner, 1).unwrap();
        assert!(first.published);
        let stamped = first.published_at;
        assert_ne!(stamped, 0);

        let second = blog.publish_post(owner, 1).unwrap();
        assert!(second.published);
        assert_eq!(second.published_at, stamped);
    }

    #[test]
    fn test_publish_by_non_author_allowed() {
        let (mut blog, owner) = blog_with_owner();
        let stranger = Uuid::new_v4();

        blog.create_post(owner, "My first post".to_string(), "Hello world!".to_string());

        let post = blog.publish_post(stranger, 1).unwrap();
        assert!(post.published);
        assert_eq!(post.author, owner);
    }

    #[test]
    fn test_publish_unknown_id() {
        let (mut blog, owner) = blog_with_owner();

        let err = blog.publish_post(owner, 1).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn test_fetch_by_content_returns_first_match() {
        let (mut blog, owner) = blog_with_owner();

        blog.create_post(owner, "Original".to_string(), "Hello world!".to_string());
        blog.create_post(owner, "Duplicate".to_string(), "Hello world!".to_string());

        let post = blog.post_by_content("Hello world!").unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "Original");
    }

    #[test]
    fn test_fetch_by_content_unmatched() {
        let (mut blog, owner) = blog_with_owner();

        blog.create_post(owner, "My first post".to_string(), "Hello world!".to_string());

        let err = blog.post_by_content("Hello Mars!").unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn test_single_post_blog() {
        let (mut blog, owner) = blog_with_owner();
        let addr1 = Uuid::new_v4();

        blog.create_post(owner, "My first post".to_string(), "Hello world!".to_string());

        let posts = blog.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "My first post");

        assert_eq!(blog.posts_by_author(owner).len(), 1);
        assert_eq!(blog.posts_by_author(addr1).len(), 0);
    }

    #[test]
    fn test_foreign_update_leaves_post_intact() {
        let (mut blog, owner) = blog_with_owner();
        let addr1 = Uuid::new_v4();

        blog.create_post(owner, "My first post".to_string(), "Hello world!".to_string());

        let err = blog
            .update_post(addr1, 1, "Stolen".to_string(), "Mine now".to_string())
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized { .. }));

        assert_eq!(blog.post_by_id(1).unwrap().title, "My first post");
    }

    #[test]
    fn test_multiple_authors() {
        let (mut blog, owner) = blog_with_owner();
        let addr1 = Uuid::new_v4();
        let addr2 = Uuid::new_v4();

        blog.create_post(owner, "My first post".to_string(), "Hello world!".to_string());
        blog.create_post(owner, "My second post".to_string(), "Hello Lisbon!".to_string());
        blog.create_post(
            owner,
            "My third post".to_string(),
            "Hello Singapore!".to_string(),
        );

        blog.create_post(addr1, "Your first post".to_string(), "Goodbye world!".to_string());
        blog.create_post(
            addr1,
            "Your second post".to_string(),
            "Goodbye Lisbon!".to_string(),
        );

        blog.create_post(addr2, "Their first post".to_string(), "I like you!".to_string());

        let owner_posts = blog.posts_by_author(owner);
        let addr1_posts = blog.posts_by_author(addr1);
        let addr2_posts = blog.posts_by_author(addr2);

        assert_eq!(owner_posts.len(), 3);
        assert_eq!(addr1_posts.len(), 2);
        assert_eq!(addr2_posts.len(), 1);

        assert_eq!(owner_posts[0].title, "My first post");
        assert_eq!(addr1_posts[0].title, "Your first post");
        assert_eq!(addr2_posts[0].title, "Their first post");

        assert_eq!(owner_posts[0].author, owner);
        assert_eq!(addr1_posts[0].author, addr1);
        assert_eq!(addr2_posts[0].author, addr2);

        // Creation order is preserved within each author's slice.
        let owner_ids: Vec<u64> = owner_posts.iter().map(|p| p.id).collect();
        assert_eq!(owner_ids, vec![1, 2, 3]);
        let addr1_ids: Vec<u64> = addr1_posts.iter().map(|p| p.id).collect();
        assert_eq!(addr1_ids, vec![4, 5]);
    }

    #[test]
    fn test_restore_continues_id_sequence() {
        let owner = Uuid::new_v4();
        let posts = vec![
            Post::new(1, owner, "a".to_string(), "one".to_string()),
            Post::new(2, owner, "b".to_string(), "two".to_string()),
        ];

        let mut blog = Blog::restore("Blogger".to_string(), owner, posts, 3);

        let id = blog.create_post(owner, "c".to_string(), "three".to_string()).id;
        assert_eq!(id, 3);
        assert_eq!(blog.posts().len(), 3);
    }
}
