use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub image: String,
    /// Display order matters: cards only show the first few entries.
    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub status: ProjectStatus,
    pub featured: bool,
    pub category: String,
    pub date: NaiveDate,
}

impl Project {
    pub fn uses_tech(&self, tech: &str) -> bool {
        self.tech_stack.iter().any(|t| t == tech)
    }

    pub fn shares_tech_with(&self, other: &Project) -> bool {
        self.tech_stack.iter().any(|t| other.uses_tech(t))
    }
}
