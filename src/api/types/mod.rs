//! Request/response types shared by the handlers

pub mod error;
pub mod json;
pub mod pages;
pub mod path;
pub mod prediction;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use pages::{
    AdminDashboardResponse, AdminPostEditorResponse, AdminPostsResponse, ContactResponse,
    PageResponse, PostDetailResponse, PostListResponse, ProjectDetailResponse,
    ProjectListResponse,
};
pub use path::Path;
pub use prediction::{PredictionRequest, PredictionResponse};
