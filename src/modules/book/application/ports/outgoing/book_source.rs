use crate::modules::book::application::domain::entities::BookReview;

pub trait BookSource: Send + Sync {
    fn book_reviews(&self) -> &[BookReview];
}
