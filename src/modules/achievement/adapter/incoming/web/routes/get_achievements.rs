use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::achievement::application::domain::entities::Achievement;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetAchievementsQuery {
    /// `certification`, `award`, `recognition`, `education`, `research` or `all`
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/achievements",
    tag = "achievements",
    params(GetAchievementsQuery),
    responses(
        (status = 200, description = "Achievements, most recent first", body = inline(SuccessResponse<Vec<Achievement>>)),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
    )
)]
#[get("/api/achievements")]
pub async fn get_achievements_handler(
    query: web::Query<GetAchievementsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let achievements = match query.kind.as_deref() {
        Some(kind) => data.achievement.by_type(kind),
        None => data.achievement.all(),
    };

    ApiResponse::success(achievements)
}
