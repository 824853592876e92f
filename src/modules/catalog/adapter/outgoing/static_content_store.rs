use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::info;

use super::{validation, ContentBundle, ContentCounts, ContentLoadError};
use crate::modules::achievement::application::domain::entities::Achievement;
use crate::modules::achievement::application::ports::outgoing::AchievementSource;
use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::outgoing::BlogSource;
use crate::modules::book::application::domain::entities::BookReview;
use crate::modules::book::application::ports::outgoing::BookSource;
use crate::modules::profile::application::domain::entities::ProfileDocument;
use crate::modules::profile::application::ports::outgoing::ProfileSource;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::ProjectSource;

const PROFILE_FILE: &str = "profile.json";
const PROJECTS_FILE: &str = "projects.json";
const BLOGS_FILE: &str = "blogs.json";
const BOOKS_FILE: &str = "books.json";
const ACHIEVEMENTS_FILE: &str = "achievements.json";

macro_rules! embedded_asset {
    ($file:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/content/", $file))
    };
}

/// Unparsed JSON text of the five assets.
struct RawContent {
    profile: String,
    projects: String,
    blogs: String,
    books: String,
    achievements: String,
}

impl RawContent {
    fn embedded() -> Self {
        Self {
            profile: embedded_asset!("profile.json").to_string(),
            projects: embedded_asset!("projects.json").to_string(),
            blogs: embedded_asset!("blogs.json").to_string(),
            books: embedded_asset!("books.json").to_string(),
            achievements: embedded_asset!("achievements.json").to_string(),
        }
    }

    async fn read_dir(dir: &Path) -> Result<Self, ContentLoadError> {
        Ok(Self {
            profile: read_asset(dir, PROFILE_FILE).await?,
            projects: read_asset(dir, PROJECTS_FILE).await?,
            blogs: read_asset(dir, BLOGS_FILE).await?,
            books: read_asset(dir, BOOKS_FILE).await?,
            achievements: read_asset(dir, ACHIEVEMENTS_FILE).await?,
        })
    }

    fn parse(&self) -> Result<ContentBundle, ContentLoadError> {
        Ok(ContentBundle {
            profile: parse_asset::<ProfileDocument>(PROFILE_FILE, &self.profile)?,
            projects: parse_asset(PROJECTS_FILE, &self.projects)?,
            blog_posts: parse_asset(BLOGS_FILE, &self.blogs)?,
            book_reviews: parse_asset(BOOKS_FILE, &self.books)?,
            achievements: parse_asset(ACHIEVEMENTS_FILE, &self.achievements)?,
        })
    }
}

async fn read_asset(dir: &Path, file: &str) -> Result<String, ContentLoadError> {
    let path = dir.join(file);
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ContentLoadError::Io {
            file: path.display().to_string(),
            source,
        })
}

fn parse_asset<T: DeserializeOwned>(file: &str, raw: &str) -> Result<T, ContentLoadError> {
    serde_json::from_str(raw).map_err(|source| ContentLoadError::Parse {
        file: file.to_string(),
        source,
    })
}

//
// ──────────────────────────────────────────────────────────
// Store
// ──────────────────────────────────────────────────────────
//

/// Validated, immutable content shared by every query service.
///
/// Cloning is cheap: all clones point at the same bundle.
#[derive(Debug, Clone)]
pub struct StaticContentStore {
    bundle: Arc<ContentBundle>,
}

impl StaticContentStore {
    /// Content compiled into the binary from `content/`.
    pub fn embedded() -> Result<Self, ContentLoadError> {
        let store = Self::from_bundle(RawContent::embedded().parse()?)?;
        info!(counts = ?store.counts(), "Loaded embedded content");
        Ok(store)
    }

    /// Reads the five assets from `dir`, replacing the embedded copy.
    pub async fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ContentLoadError> {
        let dir = dir.as_ref();
        let store = Self::from_bundle(RawContent::read_dir(dir).await?.parse()?)?;
        info!(dir = %dir.display(), counts = ?store.counts(), "Loaded content directory");
        Ok(store)
    }

    pub fn from_bundle(bundle: ContentBundle) -> Result<Self, ContentLoadError> {
        validation::validate(&bundle)?;
        Ok(Self {
            bundle: Arc::new(bundle),
        })
    }

    pub fn counts(&self) -> ContentCounts {
        self.bundle.counts()
    }
}

impl ProfileSource for StaticContentStore {
    fn profile_document(&self) -> &ProfileDocument {
        &self.bundle.profile
    }
}

impl ProjectSource for StaticContentStore {
    fn projects(&self) -> &[Project] {
        &self.bundle.projects
    }
}

impl BlogSource for StaticContentStore {
    fn blog_posts(&self) -> &[BlogPost] {
        &self.bundle.blog_posts
    }
}

impl BookSource for StaticContentStore {
    fn book_reviews(&self) -> &[BookReview] {
        &self.bundle.book_reviews
    }
}

impl AchievementSource for StaticContentStore {
    fn achievements(&self) -> &[Achievement] {
        &self.bundle.achievements
    }
}
