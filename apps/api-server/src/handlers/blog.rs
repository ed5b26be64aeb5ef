//! Blog metadata endpoint.

use actix_web::{HttpResponse, web};

use scribe_shared::dto::BlogResponse;
use scribe_shared::response::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/blog - name, owner and post count of this store instance.
pub async fn blog_info(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blog = state.blog.read().await;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(BlogResponse {
        name: blog.name().to_string(),
        owner: blog.owner().to_string(),
        post_count: blog.posts().len(),
    })))
}
