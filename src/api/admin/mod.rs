//! Admin pages. Everything except the login page sits behind [`RequireAdmin`].

use axum::{routing::get, Router};
use tracing::info;

use super::middleware::RequireAdmin;
use super::state::AppState;
use super::types::{
    AdminDashboardResponse, AdminPostEditorResponse, AdminPostsResponse, Json, PageResponse, Path,
};

/// Create admin router, nested under `/admin`
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page))
        .route("/dashboard", get(dashboard))
        .route("/posts", get(list_posts))
        .route("/posts/edit/{post_id}", get(edit_post))
}

/// GET /admin/login
pub async fn login_page() -> Json<PageResponse> {
    Json(PageResponse::new(
        "Admin login portal. Please provide credentials.",
        "Admin Login",
    ))
}

/// GET /admin/dashboard
pub async fn dashboard(_admin: RequireAdmin) -> Json<AdminDashboardResponse> {
    Json(AdminDashboardResponse {
        message: "Welcome to the Admin Dashboard!".to_string(),
        page: "Admin Dashboard".to_string(),
        status: "authenticated".to_string(),
    })
}

/// GET /admin/posts
pub async fn list_posts(_admin: RequireAdmin) -> Json<AdminPostsResponse> {
    Json(AdminPostsResponse {
        message: "Manage your blog posts here.".to_string(),
        page: "Admin Posts".to_string(),
        posts_count: 5,
    })
}

/// GET /admin/posts/edit/{post_id}
///
/// The gate is extracted before the path, so an unauthenticated request is
/// rejected with 401 whatever `post_id` holds.
pub async fn edit_post(
    _admin: RequireAdmin,
    Path(post_id): Path<i64>,
) -> Json<AdminPostEditorResponse> {
    info!(post_id, "Opening post editor");

    Json(AdminPostEditorResponse {
        message: format!("Editing post with ID: {}", post_id),
        page: "Admin Post Editor".to_string(),
        post_id,
    })
}
