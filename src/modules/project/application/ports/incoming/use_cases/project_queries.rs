use crate::modules::project::application::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// Filter
// ──────────────────────────────────────────────────────────
//

/// Combined listing filter. `None` and `"all"` both mean "no constraint".
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub tech: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Every listing is ordered newest first unless stated otherwise.
pub trait ProjectQueryUseCase: Send + Sync {
    fn all(&self) -> Vec<&Project>;

    fn featured(&self) -> Vec<&Project>;

    /// `"all"` behaves like [`ProjectQueryUseCase::all`]; unknown categories yield nothing.
    fn by_category(&self, category: &str) -> Vec<&Project>;

    fn by_status(&self, status: &str) -> Vec<&Project>;

    fn by_id(&self, id: u32) -> Option<&Project>;

    /// Every tech entry across the collection, de-duplicated and sorted.
    fn all_tech_stack(&self) -> Vec<&str>;

    fn all_categories(&self) -> Vec<&str>;

    /// Projects sharing the category or a tech entry, in collection order.
    fn related(&self, project: &Project, limit: usize) -> Vec<&Project>;

    fn filter(&self, filter: &ProjectFilter) -> Vec<&Project>;
}
