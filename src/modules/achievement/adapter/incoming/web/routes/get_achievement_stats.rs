use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::achievement::application::domain::entities::AchievementTypeCount;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/achievements/stats",
    tag = "achievements",
    responses(
        (status = 200, description = "Count per achievement type", body = inline(SuccessResponse<Vec<AchievementTypeCount>>)),
    )
)]
#[get("/api/achievements/stats")]
pub async fn get_achievement_stats_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.achievement.type_counts())
}
