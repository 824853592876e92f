use crate::modules::achievement::application::domain::entities::Achievement;

pub trait AchievementSource: Send + Sync {
    fn achievements(&self) -> &[Achievement];
}
