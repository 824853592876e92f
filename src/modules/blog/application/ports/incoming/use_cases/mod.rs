mod blog_queries;

pub use blog_queries::{BlogFilter, BlogQueryUseCase};
