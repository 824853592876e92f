use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::BlogFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetBlogsQuery {
    /// Case-insensitive match on title, excerpt or tags
    pub search: Option<String>,
    /// `tech`, `life`, `tutorials`, `other` or `all`
    pub category: Option<String>,
    /// Tag, compared without case
    pub tag: Option<String>,
}

impl From<GetBlogsQuery> for BlogFilter {
    fn from(q: GetBlogsQuery) -> Self {
        BlogFilter {
            search: q.search,
            category: q.category,
            tag: q.tag,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/blogs",
    tag = "blogs",
    params(GetBlogsQuery),
    responses(
        (status = 200, description = "Posts, newest first", body = inline(SuccessResponse<Vec<BlogPost>>)),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
    )
)]
#[get("/api/blogs")]
pub async fn get_blogs_handler(
    query: web::Query<GetBlogsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter: BlogFilter = query.into_inner().into();
    let posts = data.blog.filter(&filter);

    debug!(count = posts.len(), ?filter, "Listed blog posts");

    ApiResponse::success(posts)
}
