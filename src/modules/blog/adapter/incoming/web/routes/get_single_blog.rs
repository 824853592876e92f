use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::blog::application::domain::entities::BlogPost;
use crate::shared::api::ApiResponse;
use crate::shared::content::markup::{parse_blocks, ContentBlock};
use crate::AppState;

const RELATED_LIMIT: usize = 3;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct BlogDetailResponse {
    pub post: BlogPost,
    /// Block outline of `post.content`.
    pub blocks: Vec<ContentBlock>,
    pub related: Vec<BlogPost>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/blogs/{slug}",
    tag = "blogs",
    params(("slug" = String, Path, description = "Post slug, matched exactly")),
    responses(
        (status = 200, description = "Post with outline and related posts", body = inline(SuccessResponse<BlogDetailResponse>)),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
    )
)]
#[get("/api/blogs/{slug}")]
pub async fn get_blog_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    let Some(post) = data.blog.by_slug(&slug) else {
        debug!(%slug, "Blog post not found");
        return ApiResponse::not_found("BLOG_NOT_FOUND", "Blog post not found");
    };

    ApiResponse::success(BlogDetailResponse {
        blocks: parse_blocks(&post.content),
        related: data
            .blog
            .related(post, RELATED_LIMIT)
            .into_iter()
            .cloned()
            .collect(),
        post: post.clone(),
    })
}
