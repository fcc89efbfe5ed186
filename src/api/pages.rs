//! Public content pages

use tracing::debug;

use crate::api::types::{
    ContactResponse, Json, PageResponse, Path, PostDetailResponse, PostListResponse,
    ProjectDetailResponse, ProjectListResponse,
};

/// GET /
pub async fn home() -> Json<PageResponse> {
    Json(PageResponse::new("Welcome to my Portfolio!", "Home"))
}

/// GET /about
pub async fn about() -> Json<PageResponse> {
    Json(PageResponse::new("Learn more about me here.", "About"))
}

/// GET /portfolio
pub async fn list_projects() -> Json<ProjectListResponse> {
    Json(ProjectListResponse {
        message: "Here are my projects.".to_string(),
        page: "Portfolio".to_string(),
        projects: ["Project A", "Project B", "Project C"]
            .into_iter()
            .map(String::from)
            .collect(),
    })
}

/// GET /portfolio/{slug}
///
/// Any slug is accepted and echoed back.
pub async fn get_project(Path(slug): Path<String>) -> Json<ProjectDetailResponse> {
    debug!(slug = %slug, "Serving project detail");

    Json(ProjectDetailResponse {
        message: format!("Details for project: {}", slug),
        page: "Portfolio Detail".to_string(),
        project_slug: slug,
    })
}

/// GET /blog
pub async fn list_posts() -> Json<PostListResponse> {
    Json(PostListResponse {
        message: "Welcome to my blog!".to_string(),
        page: "Blog".to_string(),
        posts: ["Post 1", "Post 2", "Post 3"]
            .into_iter()
            .map(String::from)
            .collect(),
    })
}

/// GET /blog/{slug}
pub async fn get_post(Path(slug): Path<String>) -> Json<PostDetailResponse> {
    debug!(slug = %slug, "Serving blog post detail");

    Json(PostDetailResponse {
        message: format!("Details for blog post: {}", slug),
        page: "Blog Post Detail".to_string(),
        post_slug: slug,
    })
}

/// GET /contact
pub async fn contact() -> Json<ContactResponse> {
    Json(ContactResponse {
        message: "Get in touch with me!".to_string(),
        page: "Contact".to_string(),
        email: "contact@example.com".to_string(),
    })
}
