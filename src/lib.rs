//! Folio API
//!
//! Backend for a personal portfolio and blog:
//! - Static content pages
//! - Admin area behind a pluggable credential check
//! - Placeholder inference endpoint with explicit availability states
//! - Liveness endpoint

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use self::config::AppConfig;

use std::sync::Arc;

use tracing::{info, warn};

use api::state::AppState;
use infrastructure::auth::StaticTokenVerifier;
use infrastructure::inference::initialize_inference;

/// Build the application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    let verifier = StaticTokenVerifier::from_config(&config.admin);

    if !verifier.is_configured() {
        warn!("No admin token configured; all admin routes will reject requests");
    }

    let inference = initialize_inference(&config.inference);
    info!(inference = inference.label(), "Application state created");

    AppState::new(
        Arc::new(verifier),
        inference,
        config.server.service_name.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_app_state_from_defaults() {
        let state = create_app_state(&AppConfig::default());

        assert_eq!(&*state.service_name, "Portfolio Website with Blog");
        assert_eq!(state.inference.label(), "ready");
        assert!(!state.admin_verifier.verify(Some(b"anything")).await);
    }

    #[tokio::test]
    async fn test_create_app_state_with_token() {
        let mut config = AppConfig::default();
        config.admin.token = Some("s3cret".to_string());
        config.inference.enabled = false;

        let state = create_app_state(&config);

        assert!(state.admin_verifier.verify(Some(b"s3cret")).await);
        assert_eq!(state.inference.label(), "disabled");
    }
}
