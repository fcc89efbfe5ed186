//! Payloads of the content and admin pages

use serde::{Deserialize, Serialize};

/// Page with only a message and a page name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse {
    pub message: String,
    pub page: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub message: String,
    pub page: String,
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDetailResponse {
    pub message: String,
    pub page: String,
    pub project_slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub message: String,
    pub page: String,
    pub posts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    pub message: String,
    pub page: String,
    pub post_slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub message: String,
    pub page: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboardResponse {
    pub message: String,
    pub page: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminPostsResponse {
    pub message: String,
    pub page: String,
    pub posts_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminPostEditorResponse {
    pub message: String,
    pub page: String,
    pub post_id: i64,
}

impl PageResponse {
    pub fn new(message: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            page: page.into(),
        }
    }
}
