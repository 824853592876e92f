use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::modules::project::application::ports::incoming::use_cases::ProjectFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetProjectsQuery {
    /// Case-insensitive match on title, short description or tech
    pub search: Option<String>,
    /// Project category, `all` for no constraint
    pub category: Option<String>,
    /// `completed`, `in-progress` or `archived`
    pub status: Option<String>,
    /// Exact tech stack entry
    pub tech: Option<String>,
}

impl From<GetProjectsQuery> for ProjectFilter {
    fn from(q: GetProjectsQuery) -> Self {
        ProjectFilter {
            search: q.search,
            category: q.category,
            status: q.status,
            tech: q.tech,
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
    path = "/api/projects",
    tag = "projects",
    params(GetProjectsQuery),
    responses(
        (status = 200, description = "Projects, newest first", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter: ProjectFilter = query.into_inner().into();
    let projects = data.project.filter(&filter);

    debug!(count = projects.len(), ?filter, "Listed projects");

    ApiResponse::success(projects)
}
