use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::profile::application::domain::entities::SeoData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/seo",
    tag = "profile",
    responses(
        (status = 200, description = "Site-wide metadata", body = inline(SuccessResponse<SeoData>)),
    )
)]
#[get("/api/seo")]
pub async fn get_seo_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.profile.seo())
}
