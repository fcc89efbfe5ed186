//! Builds the inference availability state at startup

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use super::{MeanPredictor, ScalingPreprocessor};
use crate::config::InferenceConfig;
use crate::domain::{DomainError, InferencePipeline, InferenceState};

/// Resolve the inference feature into one of its three states
pub fn initialize_inference(config: &InferenceConfig) -> InferenceState {
    if !config.enabled {
        info!("Inference disabled by configuration");
        return InferenceState::Disabled;
    }

    match build_pipeline(config) {
        Ok(pipeline) => {
            info!(pipeline = %pipeline.describe(), "Inference pipeline initialized");
            InferenceState::Ready(pipeline)
        }
        Err(e) => {
            warn!(error = %e, "Inference pipeline unavailable");
            InferenceState::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

fn build_pipeline(config: &InferenceConfig) -> Result<InferencePipeline, DomainError> {
    // The placeholder stages read nothing from the artifacts, but a
    // configured artifact must exist.
    check_artifact("model", config.model_path.as_deref())?;
    check_artifact("preprocessor", config.preprocessor_path.as_deref())?;

    Ok(InferencePipeline::new(
        Arc::new(ScalingPreprocessor::default()),
        Arc::new(MeanPredictor::default()),
    ))
}

fn check_artifact(kind: &str, path: Option<&str>) -> Result<(), DomainError> {
    let Some(path) = path else {
        return Ok(());
    };

    if Path::new(path).is_file() {
        Ok(())
    } else {
        Err(DomainError::configuration(format!(
            "{} artifact '{}' not found",
            kind, path
        )))
    }
}
