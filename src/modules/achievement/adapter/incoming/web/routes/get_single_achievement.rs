use actix_web::{get, web, Responder};
use tracing::debug;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::achievement::application::domain::entities::Achievement;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/achievements/{achievement_id}",
    tag = "achievements",
    params(("achievement_id" = u32, Path, description = "Achievement id")),
    responses(
        (status = 200, description = "Achievement", body = inline(SuccessResponse<Achievement>)),
        (status = 404, description = "Achievement not found", body = ErrorResponse),
    )
)]
#[get("/api/achievements/{achievement_id}")]
pub async fn get_achievement_by_id_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw_id = path.into_inner();

    match raw_id
        .parse::<u32>()
        .ok()
        .and_then(|id| data.achievement.by_id(id))
    {
        Some(achievement) => ApiResponse::success(achievement),
        None => {
            debug!(achievement_id = %raw_id, "Achievement not found");
            ApiResponse::not_found("ACHIEVEMENT_NOT_FOUND", "Achievement not found")
        }
    }
}
