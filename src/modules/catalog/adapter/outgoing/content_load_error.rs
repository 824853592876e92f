#[derive(Debug, thiserror::Error)]
pub enum ContentLoadError {
    #[error("Failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate id {id} in {collection}")]
    DuplicateId { collection: &'static str, id: u32 },

    #[error("Duplicate slug '{slug}' in {collection}")]
    DuplicateSlug {
        collection: &'static str,
        slug: String,
    },

    #[error("Slug '{slug}' in {collection} is not URL-safe")]
    InvalidSlug {
        collection: &'static str,
        slug: String,
    },

    #[error("Book review '{slug}' has rating {rating}, expected 0 to 5")]
    RatingOutOfRange { slug: String, rating: u8 },
}
