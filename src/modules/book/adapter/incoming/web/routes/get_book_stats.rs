use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::book::application::domain::entities::BookStats;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/books/stats",
    tag = "books",
    responses(
        (status = 200, description = "Shelf totals", body = inline(SuccessResponse<BookStats>)),
    )
)]
#[get("/api/books/stats")]
pub async fn get_book_stats_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.book.stats())
}
