use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/books/tags",
    tag = "books",
    responses(
        (status = 200, description = "Distinct review tags, sorted", body = inline(SuccessResponse<Vec<String>>)),
    )
)]
#[get("/api/books/tags")]
pub async fn get_book_tags_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.book.all_tags())
}
