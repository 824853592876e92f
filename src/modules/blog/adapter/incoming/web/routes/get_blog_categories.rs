use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::blog::application::domain::entities::BlogCategoryInfo;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/blogs/categories",
    tag = "blogs",
    responses(
        (status = 200, description = "Category descriptors, `all` first", body = inline(SuccessResponse<Vec<BlogCategoryInfo>>)),
    )
)]
#[get("/api/blogs/categories")]
pub async fn get_blog_categories_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.blog.categories())
}
