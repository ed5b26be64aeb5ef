//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// Request to update an existing post's title and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
}

/// Query string for the exact-content lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentLookupQuery {
    pub content: String,
}

/// Response containing one post.
///
/// `published_at` is seconds since the Unix epoch; 0 means unpublished.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub published: bool,
    pub published_at: i64,
}

/// Response containing the blog's metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    pub name: String,
    pub owner: String,
    pub post_count: usize,
}
