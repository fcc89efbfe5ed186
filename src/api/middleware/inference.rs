//! Inference availability gate

use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{InferencePipeline, InferenceState};

pub const INFERENCE_DISABLED: &str = "AI features are disabled for this service.";
pub const INFERENCE_UNAVAILABLE: &str = "AI models are not loaded or available.";

/// Extractor yielding the ready pipeline.
///
/// Placed before the body extractor, it answers 403/503 without reading the
/// request body.
#[derive(Debug, Clone)]
pub struct RequireInference(pub InferencePipeline);

impl FromRequestParts<AppState> for RequireInference {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match state.inference.as_ref() {
            InferenceState::Ready(pipeline) => Ok(RequireInference(pipeline.clone())),
            InferenceState::Disabled => Err(ApiError::forbidden(INFERENCE_DISABLED)),
            InferenceState::Unavailable { reason } => {
                debug!(reason = %reason, "Inference requested while unavailable");
                Err(ApiError::unavailable(INFERENCE_UNAVAILABLE))
            }
        }
    }
}
