mod book_query_service;

pub use book_query_service::BookQueryService;
