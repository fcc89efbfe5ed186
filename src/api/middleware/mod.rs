//! API middleware components

pub mod admin_auth;
pub mod inference;
pub mod logging;
pub mod metrics;
pub mod security;

pub use admin_auth::{RequireAdmin, ADMIN_AUTH_FAILED};
pub use inference::RequireInference;
pub use logging::logging_middleware;
pub use self::metrics::metrics_middleware;
pub use security::security_headers_middleware;
