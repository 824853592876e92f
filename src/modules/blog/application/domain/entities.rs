use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BlogCategory {
    Tech,
    Life,
    Tutorials,
    Other,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 4] = [
        BlogCategory::Tech,
        BlogCategory::Life,
        BlogCategory::Tutorials,
        BlogCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlogCategory::Tech => "tech",
            BlogCategory::Life => "life",
            BlogCategory::Tutorials => "tutorials",
            BlogCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlogCategory::Tech => "Tech",
            BlogCategory::Life => "Life",
            BlogCategory::Tutorials => "Tutorials",
            BlogCategory::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BlogCategory::Tech => "Code",
            BlogCategory::Life => "Heart",
            BlogCategory::Tutorials => "BookOpen",
            BlogCategory::Other => "Folder",
        }
    }
}

/// Filter chip shown above the blog listing. The first entry is always `all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BlogCategoryInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl BlogCategoryInfo {
    pub fn all_posts() -> Self {
        Self {
            id: "all",
            label: "All Posts",
            icon: "LayoutGrid",
        }
    }
}

impl From<BlogCategory> for BlogCategoryInfo {
    fn from(category: BlogCategory) -> Self {
        Self {
            id: category.as_str(),
            label: category.label(),
            icon: category.icon(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u32,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub content: String,
    pub date: NaiveDate,
    pub likes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Lightweight markup, see [`crate::shared::content::markup`].
    pub content: String,
    pub cover_image: String,
    pub author: String,
    pub category: BlogCategory,
    pub tags: Vec<String>,
    pub published_at: NaiveDate,
    /// Minutes.
    pub read_time: u32,
    pub featured: bool,
    pub likes: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl BlogPost {
    pub fn has_tag_ignore_case(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn shares_tag_with(&self, other: &BlogPost) -> bool {
        self.tags.iter().any(|t| other.tags.contains(t))
    }
}
