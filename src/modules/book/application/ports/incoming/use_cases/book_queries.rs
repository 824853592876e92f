use crate::modules::book::application::domain::entities::{
    BookCategoryInfo, BookReview, BookStats,
};

//
// ──────────────────────────────────────────────────────────
// Filter
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_rating: Option<u8>,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Listings are ordered by `publishedAt`, newest first, unless noted.
pub trait BookQueryUseCase: Send + Sync {
    fn all(&self) -> Vec<&BookReview>;

    fn featured(&self) -> Vec<&BookReview>;

    fn by_category(&self, category: &str) -> Vec<&BookReview>;

    fn by_slug(&self, slug: &str) -> Option<&BookReview>;

    /// Highest rated first; ties keep asset order.
    fn by_min_rating(&self, min_rating: u8) -> Vec<&BookReview>;

    fn recent(&self, limit: usize) -> Vec<&BookReview>;

    fn all_tags(&self) -> Vec<&str>;

    fn categories(&self) -> Vec<BookCategoryInfo>;

    fn search(&self, query: &str) -> Vec<&BookReview>;

    fn related(&self, review: &BookReview, limit: usize) -> Vec<&BookReview>;

    fn stats(&self) -> BookStats;

    fn filter(&self, filter: &BookFilter) -> Vec<&BookReview>;
}
