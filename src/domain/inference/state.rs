use super::InferencePipeline;

/// Availability of the inference feature, fixed at startup.
///
/// Turning the feature off and failing to initialise it are distinct: the
/// former answers 403, the latter 503.
#[derive(Debug, Clone)]
pub enum InferenceState {
    /// Switched off by configuration
    Disabled,
    /// Switched on, but the pipeline could not be initialised
    Unavailable { reason: String },
    /// Pipeline initialised and serving
    Ready(InferencePipeline),
}

impl InferenceState {
    pub fn pipeline(&self) -> Option<&InferencePipeline> {
        match self {
            Self::Ready(pipeline) => Some(pipeline),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Unavailable { .. } => "unavailable",
            Self::Ready(_) => "ready",
        }
    }
}
