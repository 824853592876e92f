mod project_source;

pub use project_source::ProjectSource;
