use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::achievement::application::domain::entities::{
    Achievement, AchievementIcon, AchievementType, AchievementTypeCount,
};
use crate::blog::adapter::incoming::web::routes::BlogDetailResponse;
use crate::blog::application::domain::entities::{BlogCategory, BlogCategoryInfo, BlogPost, Comment};
use crate::book::adapter::incoming::web::routes::BookDetailResponse;
use crate::book::application::domain::entities::{
    BookCategory, BookCategoryCount, BookCategoryInfo, BookLinks, BookReview, BookStats,
};
use crate::catalog::adapter::outgoing::ContentCounts;
use crate::profile::adapter::incoming::web::routes::ProfileResponse;
use crate::profile::application::domain::entities::{
    Education, Profile, ResearchProject, ResearchRole, SeoData, Social,
};
use crate::project::adapter::incoming::web::routes::ProjectDetailResponse;
use crate::project::application::domain::entities::{Project, ProjectStatus};
use crate::shared::content::markup::ContentBlock;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Content API",
        version = "1.0.0",
        description = "Read-only queries over the portfolio's projects, blog posts, book reviews and achievements"
    ),
    paths(
        // Profile endpoints
        crate::profile::adapter::incoming::web::routes::get_profile_handler,
        crate::profile::adapter::incoming::web::routes::get_seo_handler,

        // Project endpoints
        crate::project::adapter::incoming::web::routes::get_projects_handler,
        crate::project::adapter::incoming::web::routes::get_featured_projects_handler,
        crate::project::adapter::incoming::web::routes::get_project_tech_stack_handler,
        crate::project::adapter::incoming::web::routes::get_project_by_id_handler,

        // Blog endpoints
        crate::blog::adapter::incoming::web::routes::get_blogs_handler,
        crate::blog::adapter::incoming::web::routes::get_featured_blogs_handler,
        crate::blog::adapter::incoming::web::routes::get_popular_blogs_handler,
        crate::blog::adapter::incoming::web::routes::get_blog_tags_handler,
        crate::blog::adapter::incoming::web::routes::get_blog_categories_handler,
        crate::blog::adapter::incoming::web::routes::get_blog_by_slug_handler,

        // Book endpoints
        crate::book::adapter::incoming::web::routes::get_books_handler,
        crate::book::adapter::incoming::web::routes::get_featured_books_handler,
        crate::book::adapter::incoming::web::routes::get_book_tags_handler,
        crate::book::adapter::incoming::web::routes::get_book_stats_handler,
        crate::book::adapter::incoming::web::routes::get_book_by_slug_handler,

        // Achievement endpoints
        crate::achievement::adapter::incoming::web::routes::get_achievements_handler,
        crate::achievement::adapter::incoming::web::routes::get_achievement_stats_handler,
        crate::achievement::adapter::incoming::web::routes::get_achievement_by_id_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Profile
            Profile,
            Social,
            Education,
            ResearchRole,
            ResearchProject,
            SeoData,
            ProfileResponse,

            // Projects
            Project,
            ProjectStatus,
            ProjectDetailResponse,

            // Blog
            BlogPost,
            BlogCategory,
            BlogCategoryInfo,
            Comment,
            BlogDetailResponse,

            // Books
            BookReview,
            BookCategory,
            BookCategoryInfo,
            BookLinks,
            BookStats,
            BookCategoryCount,
            BookDetailResponse,

            // Achievements
            Achievement,
            AchievementType,
            AchievementIcon,
            AchievementTypeCount,

            // Shared
            ContentBlock,
            ContentCounts,
        )
    ),
    tags(
        (name = "profile", description = "Profile, education, research and SEO data"),
        (name = "projects", description = "Project showcase queries"),
        (name = "blogs", description = "Blog post queries"),
        (name = "books", description = "Book review queries"),
        (name = "achievements", description = "Achievement queries"),
    )
)]
pub struct ApiDoc;
