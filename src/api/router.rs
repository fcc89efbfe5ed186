use axum::{
    http::{HeaderValue, Uri},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::admin;
use super::health;
use super::middleware::{logging_middleware, metrics_middleware, security_headers_middleware};
use super::pages;
use super::predict;
use super::state::AppState;
use super::types::ApiError;
use crate::config::CorsConfig;

/// Create the full router with application state
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        // Content pages
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/portfolio", get(pages::list_projects))
        .route("/portfolio/{slug}", get(pages::get_project))
        .route("/blog", get(pages::list_posts))
        .route("/blog/{slug}", get(pages::get_post))
        .route("/contact", get(pages::contact))
        // Admin area
        .nest("/admin", admin::create_admin_router())
        // Utility
        .route("/health", get(health::health_check))
        .route("/predict", post(predict::predict))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(cors_layer(cors))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route matches '{}'", uri.path()))
}

async fn method_not_allowed(uri: Uri) -> ApiError {
    ApiError::method_not_allowed(format!("Method not allowed for '{}'", uri.path()))
}

/// Browsers refuse credentials together with a wildcard origin, so
/// credentials are only advertised for an explicit origin list.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials)
}
