mod content_bundle;
mod content_load_error;
mod static_content_store;
mod validation;

pub use content_bundle::{ContentBundle, ContentCounts};
pub use content_load_error::ContentLoadError;
pub use static_content_store::StaticContentStore;
