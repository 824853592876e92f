mod get_book_stats;
mod get_book_tags;
mod get_books;
mod get_featured_books;
mod get_single_book;

pub use get_book_stats::*;
pub use get_book_tags::*;
pub use get_books::*;
pub use get_featured_books::*;
pub use get_single_book::*;
