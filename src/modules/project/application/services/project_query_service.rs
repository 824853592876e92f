use crate::{
    project::application::{
        domain::entities::Project,
        ports::incoming::use_cases::{ProjectFilter, ProjectQueryUseCase},
        ports::outgoing::ProjectSource,
    },
    shared::content::{limited, newest_first, sorted_unique, SearchTerm},
};

const ALL: &str = "all";

#[derive(Debug, Clone)]
pub struct ProjectQueryService<S>
where
    S: ProjectSource,
{
    source: S,
}

impl<S> ProjectQueryService<S>
where
    S: ProjectSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    fn newest_first_where<F>(&self, predicate: F) -> Vec<&Project>
    where
        F: Fn(&Project) -> bool,
    {
        newest_first(
            self.source.projects().iter().filter(|p| predicate(p)),
            |p| p.date,
        )
    }
}

fn matches_search(project: &Project, term: &SearchTerm) -> bool {
    term.matches(&project.title)
        || term.matches(&project.short_description)
        || term.matches_any(&project.tech_stack)
}

fn unconstrained(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| *v != ALL)
}

impl<S> ProjectQueryUseCase for ProjectQueryService<S>
where
    S: ProjectSource,
{
    fn all(&self) -> Vec<&Project> {
        newest_first(self.source.projects(), |p| p.date)
    }

    fn featured(&self) -> Vec<&Project> {
        self.newest_first_where(|p| p.featured)
    }

    fn by_category(&self, category: &str) -> Vec<&Project> {
        if category == ALL {
            return self.all();
        }
        self.newest_first_where(|p| p.category == category)
    }

    fn by_status(&self, status: &str) -> Vec<&Project> {
        if status == ALL {
            return self.all();
        }
        self.newest_first_where(|p| p.status.as_str() == status)
    }

    fn by_id(&self, id: u32) -> Option<&Project> {
        self.source.projects().iter().find(|p| p.id == id)
    }

    fn all_tech_stack(&self) -> Vec<&str> {
        sorted_unique(
            self.source
                .projects()
                .iter()
                .flat_map(|p| p.tech_stack.iter().map(String::as_str)),
        )
    }

    fn all_categories(&self) -> Vec<&str> {
        sorted_unique(self.source.projects().iter().map(|p| p.category.as_str()))
    }

    fn related(&self, project: &Project, limit: usize) -> Vec<&Project> {
        let related = self
            .source
            .projects()
            .iter()
            .filter(|p| p.id != project.id)
            .filter(|p| p.category == project.category || p.shares_tech_with(project))
            .collect();

        limited(related, limit)
    }

    fn filter(&self, filter: &ProjectFilter) -> Vec<&Project> {
        let term = filter.search.as_deref().and_then(SearchTerm::parse);
        let category = unconstrained(&filter.category);
        let status = unconstrained(&filter.status);
        let tech = unconstrained(&filter.tech);

        self.newest_first_where(|p| {
            term.as_ref().is_none_or(|t| matches_search(p, t))
                && category.is_none_or(|c| p.category == c)
                && status.is_none_or(|s| p.status.as_str() == s)
                && tech.is_none_or(|t| p.uses_tech(t))
        })
    }
}
