use crate::modules::project::application::domain::entities::Project;

/// Read-only access to the project collection, in authored order.
pub trait ProjectSource: Send + Sync {
    fn projects(&self) -> &[Project];
}
