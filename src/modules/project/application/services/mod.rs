mod project_query_service;

pub use project_query_service::ProjectQueryService;
