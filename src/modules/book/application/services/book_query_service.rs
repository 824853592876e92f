use crate::{
    book::application::{
        domain::entities::{
            BookCategory, BookCategoryCount, BookCategoryInfo, BookReview, BookStats,
        },
        ports::incoming::use_cases::{BookFilter, BookQueryUseCase},
        ports::outgoing::BookSource,
    },
    shared::content::{limited, newest_first, sorted_unique, SearchTerm},
};

const ALL: &str = "all";

#[derive(Debug, Clone)]
pub struct BookQueryService<S>
where
    S: BookSource,
{
    source: S,
}

impl<S> BookQueryService<S>
where
    S: BookSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    fn newest_first_where<F>(&self, predicate: F) -> Vec<&BookReview>
    where
        F: Fn(&BookReview) -> bool,
    {
        newest_first(
            self.source.book_reviews().iter().filter(|b| predicate(b)),
            |b| b.published_at,
        )
    }
}

fn matches_search(review: &BookReview, term: &SearchTerm) -> bool {
    term.matches(&review.title) || term.matches(&review.excerpt) || term.matches_any(&review.tags)
}

fn average_rating(reviews: &[BookReview]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: u32 = reviews.iter().map(|b| u32::from(b.rating)).sum();
    let average = f64::from(total) / reviews.len() as f64;
    (average * 10.0).round() / 10.0
}

impl<S> BookQueryUseCase for BookQueryService<S>
where
    S: BookSource,
{
    fn all(&self) -> Vec<&BookReview> {
        newest_first(self.source.book_reviews(), |b| b.published_at)
    }

    fn featured(&self) -> Vec<&BookReview> {
        self.newest_first_where(|b| b.featured)
    }

    fn by_category(&self, category: &str) -> Vec<&BookReview> {
        if category == ALL {
            return self.all();
        }
        self.newest_first_where(|b| b.category.as_str() == category)
    }

    fn by_slug(&self, slug: &str) -> Option<&BookReview> {
        self.source.book_reviews().iter().find(|b| b.slug == slug)
    }

    fn by_min_rating(&self, min_rating: u8) -> Vec<&BookReview> {
        let mut reviews: Vec<&BookReview> = self
            .source
            .book_reviews()
            .iter()
            .filter(|b| b.rating >= min_rating)
            .collect();
        reviews.sort_by(|a, b| b.rating.cmp(&a.rating));
        reviews
    }

    fn recent(&self, limit: usize) -> Vec<&BookReview> {
        limited(self.all(), limit)
    }

    fn all_tags(&self) -> Vec<&str> {
        sorted_unique(
            self.source
                .book_reviews()
                .iter()
                .flat_map(|b| b.tags.iter().map(String::as_str)),
        )
    }

    fn categories(&self) -> Vec<BookCategoryInfo> {
        std::iter::once(BookCategoryInfo::all_books())
            .chain(BookCategory::ALL.into_iter().map(BookCategoryInfo::from))
            .collect()
    }

    fn search(&self, query: &str) -> Vec<&BookReview> {
        match SearchTerm::parse(query) {
            Some(term) => self.newest_first_where(|b| matches_search(b, &term)),
            None => self.all(),
        }
    }

    fn related(&self, review: &BookReview, limit: usize) -> Vec<&BookReview> {
        let related = self
            .source
            .book_reviews()
            .iter()
            .filter(|b| b.id != review.id)
            .filter(|b| b.category == review.category || b.shares_tag_with(review))
            .collect();

        limited(related, limit)
    }

    fn stats(&self) -> BookStats {
        let reviews = self.source.book_reviews();

        let category_counts = BookCategory::ALL
            .into_iter()
            .map(|category| BookCategoryCount {
                id: category.as_str(),
                label: category.label(),
                emoji: category.emoji(),
                count: reviews.iter().filter(|b| b.category == category).count(),
            })
            .collect();

        BookStats {
            total_count: reviews.len(),
            total_pages: reviews
                .iter()
                .map(|b| u64::from(b.pages.unwrap_or(0)))
                .sum(),
            average_rating: average_rating(reviews),
            category_counts,
        }
    }

    fn filter(&self, filter: &BookFilter) -> Vec<&BookReview> {
        let term = filter.search.as_deref().and_then(SearchTerm::parse);
        let category = filter.category.as_deref().filter(|c| *c != ALL);

        self.newest_first_where(|b| {
            term.as_ref().is_none_or(|t| matches_search(b, t))
                && category.is_none_or(|c| b.category.as_str() == c)
                && filter.min_rating.is_none_or(|min| b.rating >= min)
        })
    }
}
