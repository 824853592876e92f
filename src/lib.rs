pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{achievement, blog, book, catalog, profile, project};

use std::sync::Arc;

use actix_web::web;

use crate::achievement::application::{
    ports::incoming::use_cases::AchievementQueryUseCase, services::AchievementQueryService,
};
use crate::blog::application::{
    ports::incoming::use_cases::BlogQueryUseCase, services::BlogQueryService,
};
use crate::book::application::{
    ports::incoming::use_cases::BookQueryUseCase, services::BookQueryService,
};
use crate::catalog::adapter::outgoing::StaticContentStore;
use crate::profile::application::{
    ports::incoming::use_cases::ProfileQueryUseCase, services::ProfileQueryService,
};
use crate::project::application::{
    ports::incoming::use_cases::ProjectQueryUseCase, services::ProjectQueryService,
};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<dyn ProfileQueryUseCase>,
    pub project: Arc<dyn ProjectQueryUseCase>,
    pub blog: Arc<dyn BlogQueryUseCase>,
    pub book: Arc<dyn BookQueryUseCase>,
    pub achievement: Arc<dyn AchievementQueryUseCase>,
}

impl AppState {
    /// Wires every query service to the same loaded catalog.
    pub fn from_store(store: StaticContentStore) -> Self {
        Self {
            profile: Arc::new(ProfileQueryService::new(store.clone())),
            project: Arc::new(ProjectQueryService::new(store.clone())),
            blog: Arc::new(BlogQueryService::new(store.clone())),
            book: Arc::new(BookQueryService::new(store.clone())),
            achievement: Arc::new(AchievementQueryService::new(store)),
        }
    }
}

/// Registers every route. Fixed segments such as `/featured` are
/// registered before the `{id}` and `{slug}` catch-alls they would
/// otherwise be captured by.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_seo_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_featured_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_tech_stack_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_by_id_handler);
    // Blogs
    cfg.service(crate::blog::adapter::incoming::web::routes::get_blogs_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_featured_blogs_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_popular_blogs_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_blog_tags_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_blog_categories_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_blog_by_slug_handler);
    // Books
    cfg.service(crate::book::adapter::incoming::web::routes::get_books_handler);
    cfg.service(crate::book::adapter::incoming::web::routes::get_featured_books_handler);
    cfg.service(crate::book::adapter::incoming::web::routes::get_book_tags_handler);
    cfg.service(crate::book::adapter::incoming::web::routes::get_book_stats_handler);
    cfg.service(crate::book::adapter::incoming::web::routes::get_book_by_slug_handler);
    // Achievements
    cfg.service(crate::achievement::adapter::incoming::web::routes::get_achievements_handler);
    cfg.service(crate::achievement::adapter::incoming::web::routes::get_achievement_stats_handler);
    cfg.service(crate::achievement::adapter::incoming::web::routes::get_achievement_by_id_handler);
}
