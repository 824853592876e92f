mod profile_queries;

pub use profile_queries::ProfileQueryUseCase;
