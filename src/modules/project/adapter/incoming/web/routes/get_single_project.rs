use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

const RELATED_LIMIT: usize = 3;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectDetailResponse {
    pub project: Project,
    pub related: Vec<Project>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = u32, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project with related projects", body = inline(SuccessResponse<ProjectDetailResponse>)),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
#[get("/api/projects/{project_id}")]
pub async fn get_project_by_id_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw_id = path.into_inner();

    // Non-numeric ids cannot name a project.
    let project = raw_id
        .parse::<u32>()
        .ok()
        .and_then(|id| data.project.by_id(id));

    match project {
        Some(project) => ApiResponse::success(ProjectDetailResponse {
            related: data
                .project
                .related(project, RELATED_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
            project: project.clone(),
        }),
        None => {
            debug!(project_id = %raw_id, "Project not found");
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
    }
}
