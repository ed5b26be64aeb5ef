//! Post store handlers.
//!
//! Mutating handlers hold the write lock across the commit call so each
//! operation is atomic relative to every other: no reader observes a post
//! that is not yet durably recorded alongside its id counter.

use actix_web::{HttpResponse, web};

use scribe_core::domain::Post;
use scribe_shared::dto::{ContentLookupQuery, CreatePostRequest, PostResponse, UpdatePostRequest};
use scribe_shared::response::ApiResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title.clone(),
        content: post.content.clone(),
        author: post.author.to_string(),
        published: post.published,
        published_at: post.published_at,
    }
}

/// POST /api/posts - create a post authored by the caller.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut blog = state.blog.write().await;
    let post = blog
        .create_post(identity.caller_id, req.title, req.content)
        .clone();
    state.store.commit(&post, blog.next_id()).await?;

    tracing::info!(post_id = post.id, caller = %identity.caller_id, "Created post");

    Ok(HttpResponse::Created().json(ApiResponse::ok(to_response(&post))))
}

/// PUT /api/posts/{id} - overwrite title and content (author only).
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<u64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut blog = state.blog.write().await;
    let post = blog
        .update_post(identity.caller_id, id, req.title, req.content)?
        .clone();
    state.store.commit(&post, blog.next_id()).await?;

    tracing::info!(post_id = id, caller = %identity.caller_id, "Updated post");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(&post))))
}

/// POST /api/posts/{id}/publish - mark a post as published.
///
/// Any authenticated caller may publish any post; only the first publish
/// stamps the timestamp.
pub async fn publish(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let mut blog = state.blog.write().await;
    let post = blog.publish_post(identity.caller_id, id)?.clone();
    state.store.commit(&post, blog.next_id()).await?;

    tracing::info!(post_id = id, caller = %identity.caller_id, "Published post");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(&post))))
}

/// GET /api/posts - all posts in creation order.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blog = state.blog.read().await;
    let posts: Vec<PostResponse> = blog.posts().iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id} - look up one post by id.
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let blog = state.blog.read().await;
    let post = blog.post_by_id(path.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// GET /api/posts/lookup?content=... - first post whose content matches exactly.
pub async fn lookup(
    state: web::Data<AppState>,
    query: web::Query<ContentLookupQuery>,
) -> AppResult<HttpResponse> {
    let blog = state.blog.read().await;
    let post = blog.post_by_content(&query.content)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// GET /api/posts/mine - the caller's own posts in creation order.
pub async fn mine(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let blog = state.blog.read().await;
    let posts: Vec<PostResponse> = blog
        .posts_by_author(identity.caller_id)
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}
