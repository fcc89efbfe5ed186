//! Inference infrastructure - placeholder pipeline and its initialisation

mod loader;
mod mock;

pub use loader::initialize_inference;
pub use mock::{MeanPredictor, ScalingPreprocessor};
