use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/tech-stack",
    tag = "projects",
    responses(
        (status = 200, description = "Distinct tech entries, sorted", body = inline(SuccessResponse<Vec<String>>)),
    )
)]
#[get("/api/projects/tech-stack")]
pub async fn get_project_tech_stack_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.project.all_tech_stack())
}
