//! Inference domain - record shape, pipeline stages and availability

mod pipeline;
mod state;

pub use pipeline::{InferencePipeline, Predictor, Preprocessor};
pub use state::InferenceState;

/// One flat input/output unit of the pipeline.
///
/// Well-formed records are JSON objects with scalar values, but any JSON
/// value is accepted so stages can apply their fallbacks.
pub type Record = serde_json::Value;
