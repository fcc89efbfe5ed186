//! Application state shared by the handlers

use std::sync::Arc;

use crate::domain::{AdminVerifier, InferenceState};

/// Process-lifetime configuration injected into the route layer.
///
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub admin_verifier: Arc<dyn AdminVerifier>,
    pub inference: Arc<InferenceState>,
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(
        admin_verifier: Arc<dyn AdminVerifier>,
        inference: InferenceState,
        service_name: impl Into<String>,
    ) -> Self {
        Self {
            admin_verifier,
            inference: Arc::new(inference),
            service_name: Arc::from(service_name.into()),
        }
    }
}
