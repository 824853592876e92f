use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BookCategory {
    PhilosophyConsciousness,
    Mathematics,
    PhysicsCosmology,
    Productivity,
    Neuroscience,
    Novels,
    SciFi,
    Engineering,
}

impl BookCategory {
    /// Shelf order used by the category descriptors and the stats.
    pub const ALL: [BookCategory; 8] = [
        BookCategory::PhilosophyConsciousness,
        BookCategory::Mathematics,
        BookCategory::PhysicsCosmology,
        BookCategory::Productivity,
        BookCategory::Neuroscience,
        BookCategory::Novels,
        BookCategory::SciFi,
        BookCategory::Engineering,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookCategory::PhilosophyConsciousness => "philosophy-consciousness",
            BookCategory::Mathematics => "mathematics",
            BookCategory::PhysicsCosmology => "physics-cosmology",
            BookCategory::Productivity => "productivity",
            BookCategory::Neuroscience => "neuroscience",
            BookCategory::Novels => "novels",
            BookCategory::SciFi => "sci-fi",
            BookCategory::Engineering => "engineering",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookCategory::PhilosophyConsciousness => "Philosophy of Mind & Consciousness",
            BookCategory::Mathematics => "Mathematics",
            BookCategory::PhysicsCosmology => "Physics, Cosmology & Astronomy",
            BookCategory::Productivity => "Productivity",
            BookCategory::Neuroscience => "Neuroscience & Brain",
            BookCategory::Novels => "Novels",
            BookCategory::SciFi => "Sci-Fi",
            BookCategory::Engineering => "Engineering",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            BookCategory::PhilosophyConsciousness => "🧠",
            BookCategory::Mathematics => "🔢",
            BookCategory::PhysicsCosmology => "🌌",
            BookCategory::Productivity => "⚡",
            BookCategory::Neuroscience => "🧬",
            BookCategory::Novels => "📖",
            BookCategory::SciFi => "🚀",
            BookCategory::Engineering => "⚙️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookCategoryInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

impl BookCategoryInfo {
    pub fn all_books() -> Self {
        Self {
            id: "all",
            label: "All Books",
            emoji: "📚",
        }
    }
}

impl From<BookCategory> for BookCategoryInfo {
    fn from(category: BookCategory) -> Self {
        Self {
            id: category.as_str(),
            label: category.label(),
            emoji: category.emoji(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amazon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goodreads: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookReview {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub author: String,
    pub cover_image: String,
    pub category: BookCategory,
    /// Whole stars, `0..=5`. Checked when the catalog loads.
    pub rating: u8,
    pub excerpt: String,
    pub content: String,
    pub tags: Vec<String>,
    pub date_read: NaiveDate,
    pub published_at: NaiveDate,
    pub read_time: u32,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_links: Option<BookLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_published: Option<i32>,
}

impl BookReview {
    pub fn shares_tag_with(&self, other: &BookReview) -> bool {
        self.tags.iter().any(|t| other.tags.contains(t))
    }
}

//
// ──────────────────────────────────────────────────────────
// Stats
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookCategoryCount {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookStats {
    pub total_count: usize,
    pub total_pages: u64,
    /// Rounded to one decimal, `0.0` for an empty shelf.
    pub average_rating: f64,
    pub category_counts: Vec<BookCategoryCount>,
}
