use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::blog::application::domain::entities::BlogPost;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/blogs/featured",
    tag = "blogs",
    responses(
        (status = 200, description = "Featured posts, newest first", body = inline(SuccessResponse<Vec<BlogPost>>)),
    )
)]
#[get("/api/blogs/featured")]
pub async fn get_featured_blogs_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.blog.featured())
}
