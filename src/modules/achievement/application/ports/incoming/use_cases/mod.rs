mod achievement_queries;

pub use achievement_queries::AchievementQueryUseCase;
