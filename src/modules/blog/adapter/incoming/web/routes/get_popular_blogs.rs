use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::blog::application::domain::entities::BlogPost;
use crate::shared::api::ApiResponse;
use crate::AppState;

const DEFAULT_LIMIT: i64 = 5;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PopularBlogsQuery {
    /// Maximum number of posts. Zero or negative yields an empty list.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl PopularBlogsQuery {
    fn clamped_limit(&self) -> usize {
        usize::try_from(self.limit.max(0)).unwrap_or(usize::MAX)
    }
}

#[utoipa::path(
    get,
    path = "/api/blogs/popular",
    tag = "blogs",
    params(PopularBlogsQuery),
    responses(
        (status = 200, description = "Most liked posts first", body = inline(SuccessResponse<Vec<BlogPost>>)),
        (status = 400, description = "Limit is not a number", body = ErrorResponse),
    )
)]
#[get("/api/blogs/popular")]
pub async fn get_popular_blogs_handler(
    query: web::Query<PopularBlogsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.blog.popular(query.clamped_limit()))
}
