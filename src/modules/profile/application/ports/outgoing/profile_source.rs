use crate::modules::profile::application::domain::entities::ProfileDocument;

pub trait ProfileSource: Send + Sync {
    fn profile_document(&self) -> &ProfileDocument;
}
