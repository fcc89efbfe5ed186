//! Admin gate
//!
//! Handlers take [`RequireAdmin`] as their first extractor, so the check runs
//! and short-circuits before any other extraction or the handler body.

use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::auth::ADMIN_TOKEN_HEADER;

pub const ADMIN_AUTH_FAILED: &str = "Authentication failed: Invalid or missing admin token";

/// Extractor that requires a credential accepted by the configured verifier
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(ADMIN_TOKEN_HEADER)
            .map(|value| value.as_bytes());

        if state.admin_verifier.verify(presented).await {
            debug!(
                verifier = state.admin_verifier.verifier_name(),
                "Admin access granted"
            );
            return Ok(RequireAdmin);
        }

        debug!(
            verifier = state.admin_verifier.verifier_name(),
            header_present = presented.is_some(),
            "Admin access denied"
        );
        Err(ApiError::unauthorized(ADMIN_AUTH_FAILED))
    }
}
