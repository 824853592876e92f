use crate::modules::blog::application::domain::entities::BlogPost;

/// Read-only access to the loaded blog collection, in asset order.
pub trait BlogSource: Send + Sync {
    fn blog_posts(&self) -> &[BlogPost];
}
