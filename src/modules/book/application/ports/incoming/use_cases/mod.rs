mod book_queries;

pub use book_queries::{BookFilter, BookQueryUseCase};
