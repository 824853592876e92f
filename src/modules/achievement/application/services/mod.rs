mod achievement_query_service;

pub use achievement_query_service::AchievementQueryService;
