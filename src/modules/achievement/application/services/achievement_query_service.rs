use crate::{
    achievement::application::{
        domain::entities::{Achievement, AchievementType, AchievementTypeCount},
        ports::incoming::use_cases::AchievementQueryUseCase,
        ports::outgoing::AchievementSource,
    },
    shared::content::{limited, newest_first, sorted_unique},
};

const ALL: &str = "all";

#[derive(Debug, Clone)]
pub struct AchievementQueryService<S>
where
    S: AchievementSource,
{
    source: S,
}

impl<S> AchievementQueryService<S>
where
    S: AchievementSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    fn newest_first_where<F>(&self, predicate: F) -> Vec<&Achievement>
    where
        F: Fn(&Achievement) -> bool,
    {
        newest_first(
            self.source.achievements().iter().filter(|a| predicate(a)),
            |a| a.date,
        )
    }
}

impl<S> AchievementQueryUseCase for AchievementQueryService<S>
where
    S: AchievementSource,
{
    fn all(&self) -> Vec<&Achievement> {
        newest_first(self.source.achievements(), |a| a.date)
    }

    fn by_type(&self, kind: &str) -> Vec<&Achievement> {
        if kind == ALL {
            return self.all();
        }
        self.newest_first_where(|a| a.kind.as_str() == kind)
    }

    fn by_id(&self, id: u32) -> Option<&Achievement> {
        self.source.achievements().iter().find(|a| a.id == id)
    }

    fn certifications(&self) -> Vec<&Achievement> {
        self.newest_first_where(|a| a.kind == AchievementType::Certification)
    }

    fn awards(&self) -> Vec<&Achievement> {
        self.newest_first_where(|a| a.kind == AchievementType::Award)
    }

    fn type_counts(&self) -> Vec<AchievementTypeCount> {
        let achievements = self.source.achievements();

        AchievementType::ALL
            .into_iter()
            .map(|kind| AchievementTypeCount {
                id: kind.as_str(),
                label: kind.label(),
                count: achievements.iter().filter(|a| a.kind == kind).count(),
            })
            .collect()
    }

    fn all_skills(&self) -> Vec<&str> {
        sorted_unique(
            self.source
                .achievements()
                .iter()
                .flat_map(|a| a.skills.iter().map(String::as_str)),
        )
    }

    fn related(&self, achievement: &Achievement, limit: usize) -> Vec<&Achievement> {
        let related = self
            .source
            .achievements()
            .iter()
            .filter(|a| a.id != achievement.id)
            .filter(|a| a.kind == achievement.kind || a.shares_skill_with(achievement))
            .collect();

        limited(related, limit)
    }
}
