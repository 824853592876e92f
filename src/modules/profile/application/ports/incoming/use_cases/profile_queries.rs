use crate::modules::profile::application::domain::entities::{
    Education, Profile, ResearchRole, SeoData,
};

pub trait ProfileQueryUseCase: Send + Sync {
    fn profile(&self) -> &Profile;

    /// Most recent first, as authored.
    fn education(&self) -> &[Education];

    fn research(&self) -> &[ResearchRole];

    fn seo(&self) -> &SeoData;
}
