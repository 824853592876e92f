use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/blogs/tags",
    tag = "blogs",
    responses(
        (status = 200, description = "Distinct tags, sorted", body = inline(SuccessResponse<Vec<String>>)),
    )
)]
#[get("/api/blogs/tags")]
pub async fn get_blog_tags_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.blog.all_tags())
}
