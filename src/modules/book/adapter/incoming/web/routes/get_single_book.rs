use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::book::application::domain::entities::{BookCategoryInfo, BookReview};
use crate::shared::api::ApiResponse;
use crate::shared::content::markup::{parse_blocks, ContentBlock};
use crate::AppState;

const RELATED_LIMIT: usize = 3;

#[derive(Debug, Serialize, ToSchema)]
pub struct BookDetailResponse {
    pub review: BookReview,
    pub category: BookCategoryInfo,
    pub blocks: Vec<ContentBlock>,
    pub related: Vec<BookReview>,
}

#[utoipa::path(
    get,
    path = "/api/books/{slug}",
    tag = "books",
    params(("slug" = String, Path, description = "Review slug, matched exactly")),
    responses(
        (status = 200, description = "Review with outline and related reviews", body = inline(SuccessResponse<BookDetailResponse>)),
        (status = 404, description = "Book review not found", body = ErrorResponse),
    )
)]
#[get("/api/books/{slug}")]
pub async fn get_book_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    let Some(review) = data.book.by_slug(&slug) else {
        debug!(%slug, "Book review not found");
        return ApiResponse::not_found("BOOK_NOT_FOUND", "Book review not found");
    };

    ApiResponse::success(BookDetailResponse {
        category: review.category.into(),
        blocks: parse_blocks(&review.content),
        related: data
            .book
            .related(review, RELATED_LIMIT)
            .into_iter()
            .cloned()
            .collect(),
        review: review.clone(),
    })
}
