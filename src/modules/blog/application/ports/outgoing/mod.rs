mod blog_source;

pub use blog_source::BlogSource;
