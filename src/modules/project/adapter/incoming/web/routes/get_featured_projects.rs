use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::project::application::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "projects",
    responses(
        (status = 200, description = "Featured projects, newest first", body = inline(SuccessResponse<Vec<Project>>)),
    )
)]
#[get("/api/projects/featured")]
pub async fn get_featured_projects_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.project.featured())
}
