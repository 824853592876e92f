use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::achievement::application::domain::entities::{
    Achievement, AchievementIcon, AchievementType,
};
use crate::blog::application::domain::entities::{BlogCategory, BlogPost, Comment};
use crate::book::application::domain::entities::{BookCategory, BookLinks, BookReview};
use crate::catalog::adapter::outgoing::ContentBundle;
use crate::profile::application::domain::entities::{
    Education, Profile, ProfileDocument, ResearchProject, ResearchRole, SeoData, Social,
};
use crate::project::application::domain::entities::{Project, ProjectStatus};

// ============================================================
// Builders
// ============================================================

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Completed, unfeatured web project with no tech.
pub fn project(id: u32, title: &str, published: &str) -> Project {
    Project {
        id,
        title: title.to_string(),
        short_description: format!("{title} in one line."),
        full_description: format!("{title} in detail."),
        image: format!("/images/projects/{id}.jpg"),
        tech_stack: vec![],
        features: vec![],
        demo_url: None,
        repo_url: None,
        status: ProjectStatus::Completed,
        featured: false,
        category: "web".to_string(),
        date: date(published),
    }
}

/// Unfeatured tech post without tags or comments.
pub fn blog_post(id: u32, slug: &str, published: &str, likes: u32) -> BlogPost {
    BlogPost {
        id,
        slug: slug.to_string(),
        title: format!("Post {slug}"),
        excerpt: String::new(),
        content: String::new(),
        cover_image: format!("/images/blogs/{slug}.jpg"),
        author: "Your Name".to_string(),
        category: BlogCategory::Tech,
        tags: vec![],
        published_at: date(published),
        read_time: 5,
        featured: false,
        likes,
        comments: vec![],
    }
}

/// Unfeatured novel review without tags or page count.
pub fn book_review(id: u32, slug: &str, published: &str, rating: u8) -> BookReview {
    BookReview {
        id,
        slug: slug.to_string(),
        title: format!("Book {slug}"),
        author: "Anonymous".to_string(),
        cover_image: format!("/images/books/{slug}.jpg"),
        category: BookCategory::Novels,
        rating,
        excerpt: String::new(),
        content: String::new(),
        tags: vec![],
        date_read: date(published),
        published_at: date(published),
        read_time: 5,
        featured: false,
        book_links: None,
        pages: None,
        year_published: None,
    }
}

pub fn achievement(id: u32, awarded: &str, kind: AchievementType) -> Achievement {
    Achievement {
        id,
        title: format!("Achievement {id}"),
        organization: "Organization".to_string(),
        description: String::new(),
        date: date(awarded),
        kind,
        icon: AchievementIcon::Award,
        image: None,
        link: None,
        skills: vec![],
    }
}

// ============================================================
// Projects
// ============================================================

#[allow(clippy::too_many_arguments)]
fn catalog_project(
    id: u32,
    title: &str,
    published: &str,
    category: &str,
    status: ProjectStatus,
    featured: bool,
    short_description: &str,
    tech_stack: &[&str],
) -> Project {
    Project {
        short_description: short_description.to_string(),
        tech_stack: strings(tech_stack),
        features: strings(&["Responsive Design"]),
        demo_url: Some(format!("https://demo-{id}.example.com")),
        repo_url: Some(format!("https://github.com/yourusername/project-{id}")),
        status,
        featured,
        category: category.to_string(),
        ..project(id, title, published)
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        catalog_project(
            1,
            "E-Commerce Platform",
            "2024-06-15",
            "web",
            ProjectStatus::Completed,
            true,
            "A full-stack e-commerce solution with payment integration and admin dashboard.",
            &["React", "Node.js", "MongoDB", "Stripe", "Tailwind CSS"],
        ),
        catalog_project(
            2,
            "Task Management App",
            "2024-04-20",
            "web",
            ProjectStatus::Completed,
            true,
            "Collaborative task management with real-time updates and team features.",
            &["React", "Firebase", "Material-UI", "WebSocket"],
        ),
        catalog_project(
            3,
            "AI Image Generator",
            "2024-02-10",
            "ai",
            ProjectStatus::Completed,
            false,
            "Generate stunning images using AI with custom prompts and styles.",
            &["Next.js", "OpenAI API", "PostgreSQL", "Prisma", "Tailwind CSS"],
        ),
        catalog_project(
            4,
            "Weather Dashboard",
            "2023-12-05",
            "data",
            ProjectStatus::Completed,
            false,
            "Real-time weather data visualization with forecasts and alerts.",
            &["React", "Chart.js", "OpenWeather API", "Leaflet"],
        ),
        catalog_project(
            5,
            "Portfolio Website",
            "2024-08-01",
            "web",
            ProjectStatus::InProgress,
            false,
            "Modern portfolio with glassmorphism design and blog functionality.",
            &["React", "Vite", "Tailwind CSS", "Framer Motion"],
        ),
        catalog_project(
            6,
            "Chat Application",
            "2024-01-15",
            "realtime",
            ProjectStatus::Completed,
            true,
            "Real-time messaging app with end-to-end encryption and file sharing.",
            &["React", "Socket.io", "Node.js", "MongoDB", "WebRTC"],
        ),
    ]
}

// ============================================================
// Blog
// ============================================================

const HOOKS_CONTENT: &str = "## Introduction

React Hooks changed how we write components.

### useState

```javascript
const [count, setCount] = useState(0);
```

- Keep state local
- Lift it when shared";

fn comment(id: u32, author: &str, posted: &str, likes: u32) -> Comment {
    Comment {
        id,
        author: author.to_string(),
        avatar: Some("/images/avatars/default.jpg".to_string()),
        content: "Great read!".to_string(),
        date: date(posted),
        likes,
    }
}

#[allow(clippy::too_many_arguments)]
fn catalog_post(
    id: u32,
    slug: &str,
    title: &str,
    excerpt: &str,
    category: BlogCategory,
    tags: &[&str],
    published: &str,
    likes: u32,
) -> BlogPost {
    BlogPost {
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: format!("## {title}\n\n{excerpt}"),
        category,
        tags: strings(tags),
        ..blog_post(id, slug, published, likes)
    }
}

pub fn blog_posts() -> Vec<BlogPost> {
    let mut hooks = catalog_post(
        1,
        "getting-started-with-react-hooks",
        "Getting Started with React Hooks: A Complete Guide",
        "Learn the fundamentals of React Hooks and how they can simplify your component logic and state management.",
        BlogCategory::Tech,
        &["React", "JavaScript", "Hooks", "Frontend"],
        "2024-08-15",
        142,
    );
    hooks.content = HOOKS_CONTENT.to_string();
    hooks.featured = true;
    hooks.comments = vec![
        comment(1, "Jane Developer", "2024-08-16", 12),
        comment(2, "Code Enthusiast", "2024-08-17", 8),
    ];

    let mut tailwind = catalog_post(
        2,
        "building-responsive-layouts-tailwind",
        "Building Responsive Layouts with Tailwind CSS",
        "Master responsive design using Tailwind CSS utility classes and create beautiful layouts for all screen sizes.",
        BlogCategory::Tutorials,
        &["CSS", "Tailwind", "Responsive Design", "Frontend"],
        "2024-07-28",
        98,
    );
    tailwind.featured = true;
    tailwind.comments = vec![comment(1, "Design Lover", "2024-07-29", 5)];

    vec![
        hooks,
        tailwind,
        catalog_post(
            3,
            "my-journey-into-tech",
            "My Journey Into Tech: From Beginner to Developer",
            "A personal story about how I transitioned into tech and the lessons I learned along the way.",
            BlogCategory::Life,
            &["Career", "Personal", "Motivation", "Beginner"],
            "2024-06-10",
            256,
        ),
        catalog_post(
            4,
            "nodejs-api-best-practices",
            "Node.js API Best Practices for Production",
            "Essential patterns and practices for building robust, scalable Node.js APIs ready for production.",
            BlogCategory::Tech,
            &["Node.js", "API", "Backend", "Best Practices"],
            "2024-05-20",
            187,
        ),
        catalog_post(
            5,
            "work-life-balance-developers",
            "Finding Work-Life Balance as a Developer",
            "Tips and strategies for maintaining a healthy balance between coding and personal life.",
            BlogCategory::Life,
            &["Wellness", "Career", "Productivity", "Mental Health"],
            "2024-04-15",
            312,
        ),
        catalog_post(
            6,
            "complete-guide-git-workflow",
            "Complete Guide to Git Workflow for Teams",
            "Learn professional Git workflows, branching strategies, and collaboration techniques for development teams.",
            BlogCategory::Tutorials,
            &["Git", "DevOps", "Collaboration", "Best Practices"],
            "2024-03-08",
            156,
        ),
    ]
}

// ============================================================
// Books
// ============================================================

pub fn book_reviews() -> Vec<BookReview> {
    let geb = BookReview {
        title: "Gödel, Escher, Bach: An Eternal Golden Braid".to_string(),
        author: "Douglas Hofstadter".to_string(),
        category: BookCategory::PhilosophyConsciousness,
        excerpt: "A masterpiece exploring the nature of consciousness, self-reference, and strange loops through mathematics, art, and music.".to_string(),
        content: "## Why I Picked This Up\n\nThis book has been on my reading list for years.\n\n## Key Ideas\n\n- Strange loops\n- Formal systems".to_string(),
        tags: strings(&["consciousness", "mathematics", "philosophy", "AI", "self-reference"]),
        date_read: date("2025-12-01"),
        read_time: 8,
        featured: true,
        book_links: Some(BookLinks {
            amazon: Some("https://amazon.com/...".to_string()),
            goodreads: Some("https://goodreads.com/...".to_string()),
        }),
        pages: Some(777),
        year_published: Some(1979),
        ..book_review(1, "example-book-review", "2025-12-08", 5)
    };

    let deep_work = BookReview {
        title: "Deep Work".to_string(),
        author: "Cal Newport".to_string(),
        category: BookCategory::Productivity,
        excerpt: "Rules for focused success in a distracted world.".to_string(),
        content: "## Takeaways\n\nSchedule depth.".to_string(),
        tags: strings(&["focus", "productivity", "attention"]),
        pages: Some(296),
        ..book_review(2, "deep-work", "2025-10-01", 4)
    };

    let three_body = BookReview {
        title: "The Three-Body Problem".to_string(),
        author: "Liu Cixin".to_string(),
        category: BookCategory::SciFi,
        excerpt: "First contact told through the Cultural Revolution and a game about an unstable sun.".to_string(),
        tags: strings(&["physics", "first-contact", "china"]),
        featured: true,
        ..book_review(3, "the-three-body-problem", "2025-11-15", 4)
    };

    let principia = BookReview {
        title: "Principia Mathematica Notes".to_string(),
        author: "Alfred North Whitehead".to_string(),
        category: BookCategory::Mathematics,
        excerpt: "Working through the foundations of arithmetic one proposition at a time.".to_string(),
        tags: strings(&["mathematics", "logic"]),
        pages: Some(450),
        ..book_review(4, "principia-mathematica-notes", "2025-06-20", 3)
    };

    vec![geb, deep_work, three_body, principia]
}

// ============================================================
// Achievements
// ============================================================

fn catalog_achievement(
    id: u32,
    title: &str,
    organization: &str,
    awarded: &str,
    kind: AchievementType,
    icon: AchievementIcon,
    skills: &[&str],
) -> Achievement {
    Achievement {
        title: title.to_string(),
        organization: organization.to_string(),
        description: format!("{title} from {organization}."),
        icon,
        image: Some(format!("/images/achievements/{id}.png")),
        skills: strings(skills),
        ..achievement(id, awarded, kind)
    }
}

pub fn achievements() -> Vec<Achievement> {
    use AchievementIcon as Icon;
    use AchievementType as Kind;

    vec![
        catalog_achievement(
            1,
            "AWS Certified Solutions Architect",
            "Amazon Web Services",
            "2024-06-15",
            Kind::Certification,
            Icon::Award,
            &["AWS", "Cloud Architecture", "DevOps"],
        ),
        catalog_achievement(
            2,
            "1st Place - National Hackathon",
            "TechFest 2024",
            "2024-04-20",
            Kind::Award,
            Icon::Trophy,
            &["Problem Solving", "Team Leadership", "AI/ML"],
        ),
        catalog_achievement(
            3,
            "Google Developer Expert",
            "Google",
            "2024-02-10",
            Kind::Recognition,
            Icon::Medal,
            &["Web Development", "Community Building", "Public Speaking"],
        ),
        catalog_achievement(
            4,
            "Bachelor's in Computer Science",
            "University of Technology",
            "2023-12-15",
            Kind::Education,
            Icon::GraduationCap,
            &["Computer Science", "Software Engineering", "AI"],
        ),
        catalog_achievement(
            5,
            "Meta Frontend Developer Certificate",
            "Meta (Facebook)",
            "2023-09-05",
            Kind::Certification,
            Icon::Award,
            &["React", "JavaScript", "Frontend Architecture"],
        ),
        catalog_achievement(
            6,
            "Open Source Contributor Award",
            "GitHub",
            "2023-07-20",
            Kind::Recognition,
            Icon::Star,
            &["Open Source", "Collaboration", "Git"],
        ),
        catalog_achievement(
            7,
            "MongoDB Certified Developer",
            "MongoDB Inc.",
            "2023-05-12",
            Kind::Certification,
            Icon::Database,
            &["MongoDB", "Database Design", "NoSQL"],
        ),
        catalog_achievement(
            8,
            "Best Innovation Award",
            "Company Hackathon 2023",
            "2023-03-08",
            Kind::Award,
            Icon::Lightbulb,
            &["Innovation", "Problem Solving", "Productivity"],
        ),
    ]
}

// ============================================================
// Profile
// ============================================================

pub fn profile_document() -> ProfileDocument {
    let stats: BTreeMap<String, String> = [("gpa", "3.7/4.0"), ("universityRank", "41/457")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    ProfileDocument {
        profile: Profile {
            name: "Oshadha Samarakoon".to_string(),
            title: "AI/ML Researcher & EEE Undergraduate".to_string(),
            tagline: "Explore bravely, build deliberately, understand deeply.".to_string(),
            short_bio: "Engineering undergraduate.".to_string(),
            full_bio: "Engineering undergraduate and researcher.".to_string(),
            avatar: "/images/avatar.jpg".to_string(),
            resume_url: "/resume.pdf".to_string(),
            email: "oshadhasam345@gmail.com".to_string(),
            university_email: Some("e21345@eng.pdn.ac.lk".to_string()),
            location: "Kandy, Sri Lanka".to_string(),
            social: Social {
                github: Some("https://github.com/Oshadha345".to_string()),
                twitter: Some("https://x.com/OshadhaSam".to_string()),
                ..Default::default()
            },
            skills: strings(&["Python", "PyTorch"]),
            interests: strings(&["Philosophy of Mind"]),
            animated_roles: strings(&["AI/ML Researcher"]),
            stats,
        },
        education: vec![
            Education {
                id: 1,
                institution: "University of Peradeniya".to_string(),
                degree: "B.Sc. Engineering (Electrical & Electronic Engineering)".to_string(),
                department: None,
                period: "2023 - Present".to_string(),
                status: "Currently in 3rd Year".to_string(),
                gpa: Some("3.7/4.0".to_string()),
                rank: None,
                highlights: vec![],
            },
            Education {
                id: 2,
                institution: "Sri Chandananda Buddhist College".to_string(),
                degree: "Primary & Secondary Education".to_string(),
                department: None,
                period: "2008 - 2022".to_string(),
                status: "Completed".to_string(),
                gpa: None,
                rank: None,
                highlights: strings(&["O/L Examination (2018): 9 A's"]),
            },
        ],
        research: vec![ResearchRole {
            id: 1,
            title: "Volunteer Researcher".to_string(),
            organization: "MARC".to_string(),
            location: "University of Peradeniya".to_string(),
            period: "August 2025 - Present".to_string(),
            status: "Ongoing".to_string(),
            supervisor: None,
            department: None,
            description: "AI research for renewable energy.".to_string(),
            projects: vec![
                ResearchProject {
                    name: "Solar Irradiance Forecasting".to_string(),
                    description: "State-space models for solar prediction.".to_string(),
                    tech: strings(&["Python", "Mamba"]),
                },
                ResearchProject {
                    name: "Remote Sensing with SSMs".to_string(),
                    description: "Land cover classification on LOVEDA.".to_string(),
                    tech: strings(&["Python", "Remote Sensing"]),
                },
            ],
            learnings: vec![],
            highlights: vec![],
        }],
        seo: SeoData {
            site_title: "Oshadha Samarakoon | AI/ML Researcher".to_string(),
            site_description: "Portfolio and blog.".to_string(),
            site_url: "https://oshadha345.github.io".to_string(),
            site_image: "/images/og-image.jpg".to_string(),
            keywords: strings(&["AI", "Machine Learning", "Portfolio"]),
            twitter_handle: Some("@OshadhaSam".to_string()),
        },
    }
}

// ============================================================
// Bundle
// ============================================================

pub fn fixture_bundle() -> ContentBundle {
    ContentBundle {
        profile: profile_document(),
        projects: projects(),
        blog_posts: blog_posts(),
        book_reviews: book_reviews(),
        achievements: achievements(),
    }
}
