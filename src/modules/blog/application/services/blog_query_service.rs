use crate::{
    blog::application::{
        domain::entities::{BlogCategory, BlogCategoryInfo, BlogPost},
        ports::incoming::use_cases::{BlogFilter, BlogQueryUseCase},
        ports::outgoing::BlogSource,
    },
    shared::content::{limited, newest_first, sorted_unique, SearchTerm},
};

const ALL: &str = "all";

#[derive(Debug, Clone)]
pub struct BlogQueryService<S>
where
    S: BlogSource,
{
    source: S,
}

impl<S> BlogQueryService<S>
where
    S: BlogSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    fn newest_first_where<F>(&self, predicate: F) -> Vec<&BlogPost>
    where
        F: Fn(&BlogPost) -> bool,
    {
        newest_first(
            self.source.blog_posts().iter().filter(|p| predicate(p)),
            |p| p.published_at,
        )
    }
}

fn matches_search(post: &BlogPost, term: &SearchTerm) -> bool {
    term.matches(&post.title) || term.matches(&post.excerpt) || term.matches_any(&post.tags)
}

impl<S> BlogQueryUseCase for BlogQueryService<S>
where
    S: BlogSource,
{
    fn all(&self) -> Vec<&BlogPost> {
        newest_first(self.source.blog_posts(), |p| p.published_at)
    }

    fn featured(&self) -> Vec<&BlogPost> {
        self.newest_first_where(|p| p.featured)
    }

    fn by_category(&self, category: &str) -> Vec<&BlogPost> {
        if category == ALL {
            return self.all();
        }
        self.newest_first_where(|p| p.category.as_str() == category)
    }

    fn by_tag(&self, tag: &str) -> Vec<&BlogPost> {
        self.newest_first_where(|p| p.has_tag_ignore_case(tag))
    }

    fn by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.source.blog_posts().iter().find(|p| p.slug == slug)
    }

    fn by_id(&self, id: u32) -> Option<&BlogPost> {
        self.source.blog_posts().iter().find(|p| p.id == id)
    }

    fn popular(&self, limit: usize) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self.source.blog_posts().iter().collect();
        posts.sort_by(|a, b| b.likes.cmp(&a.likes));
        limited(posts, limit)
    }

    fn all_tags(&self) -> Vec<&str> {
        sorted_unique(
            self.source
                .blog_posts()
                .iter()
                .flat_map(|p| p.tags.iter().map(String::as_str)),
        )
    }

    fn categories(&self) -> Vec<BlogCategoryInfo> {
        std::iter::once(BlogCategoryInfo::all_posts())
            .chain(BlogCategory::ALL.into_iter().map(BlogCategoryInfo::from))
            .collect()
    }

    fn search(&self, query: &str) -> Vec<&BlogPost> {
        match SearchTerm::parse(query) {
            Some(term) => self.newest_first_where(|p| matches_search(p, &term)),
            None => self.all(),
        }
    }

    fn related(&self, post: &BlogPost, limit: usize) -> Vec<&BlogPost> {
        let related = self
            .source
            .blog_posts()
            .iter()
            .filter(|p| p.slug != post.slug)
            .filter(|p| p.category == post.category || p.shares_tag_with(post))
            .collect();

        limited(related, limit)
    }

    fn filter(&self, filter: &BlogFilter) -> Vec<&BlogPost> {
        let term = filter.search.as_deref().and_then(SearchTerm::parse);
        let category = filter.category.as_deref().filter(|c| *c != ALL);
        let tag = filter.tag.as_deref();

        self.newest_first_where(|p| {
            term.as_ref().is_none_or(|t| matches_search(p, t))
                && category.is_none_or(|c| p.category.as_str() == c)
                && tag.is_none_or(|t| p.has_tag_ignore_case(t))
        })
    }
}
