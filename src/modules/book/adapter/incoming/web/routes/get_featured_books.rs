use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::book::application::domain::entities::BookReview;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/books/featured",
    tag = "books",
    responses(
        (status = 200, description = "Featured reviews, newest first", body = inline(SuccessResponse<Vec<BookReview>>)),
    )
)]
#[get("/api/books/featured")]
pub async fn get_featured_books_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.book.featured())
}
