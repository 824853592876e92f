mod profile_query_service;

pub use profile_query_service::ProfileQueryService;
