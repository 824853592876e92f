mod blog_query_service;

pub use blog_query_service::BlogQueryService;
