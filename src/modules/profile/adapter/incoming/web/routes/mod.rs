mod get_profile;
mod get_seo;

pub use get_profile::*;
pub use get_seo::*;
