use crate::modules::achievement::application::domain::entities::{
    Achievement, AchievementTypeCount,
};

pub trait AchievementQueryUseCase: Send + Sync {
    /// Every achievement, most recent first.
    fn all(&self) -> Vec<&Achievement>;

    /// `"all"` behaves like [`AchievementQueryUseCase::all`].
    fn by_type(&self, kind: &str) -> Vec<&Achievement>;

    fn by_id(&self, id: u32) -> Option<&Achievement>;

    fn certifications(&self) -> Vec<&Achievement>;

    fn awards(&self) -> Vec<&Achievement>;

    /// One entry per type, zero counts included.
    fn type_counts(&self) -> Vec<AchievementTypeCount>;

    fn all_skills(&self) -> Vec<&str>;

    fn related(&self, achievement: &Achievement, limit: usize) -> Vec<&Achievement>;
}
