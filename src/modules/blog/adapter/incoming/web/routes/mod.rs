mod get_blog_categories;
mod get_blog_tags;
mod get_blogs;
mod get_featured_blogs;
mod get_popular_blogs;
mod get_single_blog;

pub use get_blog_categories::*;
pub use get_blog_tags::*;
pub use get_blogs::*;
pub use get_featured_blogs::*;
pub use get_popular_blogs::*;
pub use get_single_blog::*;
