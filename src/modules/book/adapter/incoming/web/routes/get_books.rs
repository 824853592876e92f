use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::book::application::domain::entities::BookReview;
use crate::modules::book::application::ports::incoming::use_cases::BookFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetBooksQuery {
    /// Case-insensitive match on title, excerpt or tags
    pub search: Option<String>,
    /// Category id such as `sci-fi`, or `all`
    pub category: Option<String>,
    /// Lowest star rating to include
    pub min_rating: Option<u8>,
}

impl From<GetBooksQuery> for BookFilter {
    fn from(q: GetBooksQuery) -> Self {
        BookFilter {
            search: q.search,
            category: q.category,
            min_rating: q.min_rating,
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
    path = "/api/books",
    tag = "books",
    params(GetBooksQuery),
    responses(
        (status = 200, description = "Reviews, newest first", body = inline(SuccessResponse<Vec<BookReview>>)),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
    )
)]
#[get("/api/books")]
pub async fn get_books_handler(
    query: web::Query<GetBooksQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter: BookFilter = query.into_inner().into();
    let reviews = data.book.filter(&filter);

    debug!(count = reviews.len(), ?filter, "Listed book reviews");

    ApiResponse::success(reviews)
}
