//! Domain layer - Core types and the seams real implementations plug into

pub mod auth;
pub mod error;
pub mod inference;

pub use auth::AdminVerifier;
pub use error::DomainError;
pub use inference::{InferencePipeline, InferenceState, Predictor, Preprocessor, Record};
