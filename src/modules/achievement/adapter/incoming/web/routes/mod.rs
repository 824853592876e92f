mod get_achievement_stats;
mod get_achievements;
mod get_single_achievement;

pub use get_achievement_stats::*;
pub use get_achievements::*;
pub use get_single_achievement::*;
