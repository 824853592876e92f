use crate::modules::blog::application::domain::entities::{BlogCategoryInfo, BlogPost};

//
// ──────────────────────────────────────────────────────────
// Filter
// ──────────────────────────────────────────────────────────
//

/// Combined listing filter. Every constraint present must hold.
#[derive(Debug, Clone, Default)]
pub struct BlogFilter {
    pub search: Option<String>,
    /// `"all"` is the same as no category.
    pub category: Option<String>,
    pub tag: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

pub trait BlogQueryUseCase: Send + Sync {
    /// Every post, newest `publishedAt` first. Equal dates keep asset order.
    fn all(&self) -> Vec<&BlogPost>;

    fn featured(&self) -> Vec<&BlogPost>;

    fn by_category(&self, category: &str) -> Vec<&BlogPost>;

    /// Case-insensitive exact tag match.
    fn by_tag(&self, tag: &str) -> Vec<&BlogPost>;

    fn by_slug(&self, slug: &str) -> Option<&BlogPost>;

    fn by_id(&self, id: u32) -> Option<&BlogPost>;

    /// Most liked first. Ties keep asset order.
    fn popular(&self, limit: usize) -> Vec<&BlogPost>;

    fn all_tags(&self) -> Vec<&str>;

    fn categories(&self) -> Vec<BlogCategoryInfo>;

    /// Blank queries return [`BlogQueryUseCase::all`].
    fn search(&self, query: &str) -> Vec<&BlogPost>;

    fn related(&self, post: &BlogPost, limit: usize) -> Vec<&BlogPost>;

    fn filter(&self, filter: &BlogFilter) -> Vec<&BlogPost>;
}
