use crate::profile::application::{
    domain::entities::{Education, Profile, ResearchRole, SeoData},
    ports::incoming::use_cases::ProfileQueryUseCase,
    ports::outgoing::ProfileSource,
};

#[derive(Debug, Clone)]
pub struct ProfileQueryService<S>
where
    S: ProfileSource,
{
    source: S,
}

impl<S> ProfileQueryService<S>
where
    S: ProfileSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S> ProfileQueryUseCase for ProfileQueryService<S>
where
    S: ProfileSource,
{
    fn profile(&self) -> &Profile {
        &self.source.profile_document().profile
    }

    fn education(&self) -> &[Education] {
        &self.source.profile_document().education
    }

    fn research(&self) -> &[ResearchRole] {
        &self.source.profile_document().research
    }

    fn seo(&self) -> &SeoData {
        &self.source.profile_document().seo
    }
}
