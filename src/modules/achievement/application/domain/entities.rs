use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AchievementType {
    Certification,
    Award,
    Recognition,
    Education,
    Research,
}

impl AchievementType {
    pub const ALL: [AchievementType; 5] = [
        AchievementType::Certification,
        AchievementType::Award,
        AchievementType::Recognition,
        AchievementType::Education,
        AchievementType::Research,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementType::Certification => "certification",
            AchievementType::Award => "award",
            AchievementType::Recognition => "recognition",
            AchievementType::Education => "education",
            AchievementType::Research => "research",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AchievementType::Certification => "Certifications",
            AchievementType::Award => "Awards",
            AchievementType::Recognition => "Recognition",
            AchievementType::Education => "Education",
            AchievementType::Research => "Research",
        }
    }
}

/// Icon names the front end knows how to draw. Anything else is rejected at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AchievementIcon {
    Award,
    Trophy,
    Medal,
    GraduationCap,
    Star,
    Database,
    Lightbulb,
    FlaskConical,
    BookOpen,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: AchievementType,
    pub icon: AchievementIcon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Achievement {
    pub fn shares_skill_with(&self, other: &Achievement) -> bool {
        self.skills.iter().any(|s| other.skills.contains(s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AchievementTypeCount {
    pub id: &'static str,
    pub label: &'static str,
    pub count: usize,
}
