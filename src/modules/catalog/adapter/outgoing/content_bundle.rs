use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::achievement::application::domain::entities::Achievement;
use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::book::application::domain::entities::BookReview;
use crate::modules::profile::application::domain::entities::ProfileDocument;
use crate::modules::project::application::domain::entities::Project;

/// Every collection the site serves, exactly as authored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentBundle {
    pub profile: ProfileDocument,
    pub projects: Vec<Project>,
    pub blog_posts: Vec<BlogPost>,
    pub book_reviews: Vec<BookReview>,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentCounts {
    pub projects: usize,
    pub blog_posts: usize,
    pub book_reviews: usize,
    pub achievements: usize,
}

impl ContentBundle {
    pub fn counts(&self) -> ContentCounts {
        ContentCounts {
            projects: self.projects.len(),
            blog_posts: self.blog_posts.len(),
            book_reviews: self.book_reviews.len(),
            achievements: self.achievements.len(),
        }
    }
}
