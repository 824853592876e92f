use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::modules::profile::application::domain::entities::{Education, Profile, ResearchRole};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub profile: Profile,
    pub education: Vec<Education>,
    pub research: Vec<ResearchRole>,
}

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Owner profile with education and research", body = inline(SuccessResponse<ProfileResponse>)),
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(ProfileResponse {
        profile: data.profile.profile().clone(),
        education: data.profile.education().to_vec(),
        research: data.profile.research().to_vec(),
    })
}
