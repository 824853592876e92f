use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{ContentBundle, ContentLoadError};
use crate::modules::book::application::domain::entities::MAX_RATING;

static SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("fail to create a regex for slugs")
});

pub(super) fn validate(bundle: &ContentBundle) -> Result<(), ContentLoadError> {
    unique_ids("projects", bundle.projects.iter().map(|p| p.id))?;

    unique_ids("blog posts", bundle.blog_posts.iter().map(|p| p.id))?;
    valid_slugs("blog posts", bundle.blog_posts.iter().map(|p| p.slug.as_str()))?;

    unique_ids("book reviews", bundle.book_reviews.iter().map(|b| b.id))?;
    valid_slugs(
        "book reviews",
        bundle.book_reviews.iter().map(|b| b.slug.as_str()),
    )?;
    if let Some(review) = bundle.book_reviews.iter().find(|b| b.rating > MAX_RATING) {
        return Err(ContentLoadError::RatingOutOfRange {
            slug: review.slug.clone(),
            rating: review.rating,
        });
    }

    unique_ids("achievements", bundle.achievements.iter().map(|a| a.id))?;

    Ok(())
}

fn unique_ids<I>(collection: &'static str, ids: I) -> Result<(), ContentLoadError>
where
    I: IntoIterator<Item = u32>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentLoadError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

fn valid_slugs<'a, I>(collection: &'static str, slugs: I) -> Result<(), ContentLoadError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for slug in slugs {
        if !SLUG.is_match(slug) {
            return Err(ContentLoadError::InvalidSlug {
                collection,
                slug: slug.to_string(),
            });
        }
        if !seen.insert(slug) {
            return Err(ContentLoadError::DuplicateSlug {
                collection,
                slug: slug.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::content_fixtures::fixture_bundle;

    #[test]
    fn fixture_bundle_is_valid() {
        assert!(validate(&fixture_bundle()).is_ok());
    }

    #[test]
    fn slug_pattern() {
        for slug in ["deep-work", "a", "gpt-4o-review", "2024-recap"] {
            assert!(SLUG.is_match(slug), "{slug} should be accepted");
        }
        for slug in ["", "Deep-Work", "deep--work", "-deep", "deep-", "deep work", "deep_work"] {
            assert!(!SLUG.is_match(slug), "{slug} should be rejected");
        }
    }

    #[test]
    fn duplicate_project_id_is_rejected() {
        let mut bundle = fixture_bundle();
        bundle.projects[1].id = bundle.projects[0].id;

        let err = validate(&bundle).unwrap_err();

        assert!(matches!(
            err,
            ContentLoadError::DuplicateId {
                collection: "projects",
                id: 1
            }
        ));
    }

    #[test]
    fn duplicate_blog_slug_is_rejected() {
        let mut bundle = fixture_bundle();
        bundle.blog_posts[2].slug = bundle.blog_posts[0].slug.clone();

        let err = validate(&bundle).unwrap_err();

        assert!(matches!(err, ContentLoadError::DuplicateSlug { .. }));
    }

    #[test]
    fn unsafe_book_slug_is_rejected() {
        let mut bundle = fixture_bundle();
        bundle.book_reviews[0].slug = "Gödel Escher Bach".to_string();

        let err = validate(&bundle).unwrap_err();

        assert!(matches!(
            err,
            ContentLoadError::InvalidSlug {
                collection: "book reviews",
                ..
            }
        ));
    }

    #[test]
    fn rating_above_five_is_rejected() {
        let mut bundle = fixture_bundle();
        bundle.book_reviews[1].rating = 6;

        let err = validate(&bundle).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Book review 'deep-work' has rating 6, expected 0 to 5"
        );
    }

    #[test]
    fn ids_may_repeat_across_collections() {
        let bundle = fixture_bundle();

        assert_eq!(bundle.projects[0].id, bundle.blog_posts[0].id);
        assert!(validate(&bundle).is_ok());
    }
}
