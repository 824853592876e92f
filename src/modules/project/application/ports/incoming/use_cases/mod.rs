mod project_queries;

pub use project_queries::{ProjectFilter, ProjectQueryUseCase};
