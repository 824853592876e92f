mod achievement_source;

pub use achievement_source::AchievementSource;
