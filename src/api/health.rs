//! Liveness endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::state::AppState;
use crate::api::types::Json;

/// Health response: status tag, response time and service name
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub service: String,
}

/// Health check status
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// ISO-8601 UTC with whole seconds and a `Z` designator
fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Always healthy; no dependency is checked
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: format_timestamp(Utc::now()),
        service: state.service_name.to_string(),
    };

    (StatusCode::OK, Json(response))
}


#[cfg(test)]
mod route_tests {
    use axum::http::StatusCode;

    use crate::api::test_support::{app, get, ready_state, send};
    use crate::domain::InferenceState;

    #[tokio::test]
    async fn test_health_endpoint() {
        let res = send(app(ready_state()), get("/health")).await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["status"], "healthy");
        assert_eq!(res.body["service"], "Portfolio Website with Blog");

        let timestamp = res.body["timestamp"].as_str().unwrap();
        assert_eq!(timestamp.len(), "2023-10-27T10:00:00Z".len());
        assert!(timestamp.ends_with('Z'));
        assert!(!timestamp.contains('.'));
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_health_ignores_inference_state() {
        let state = crate::api::test_support::state_with(InferenceState::Disabled);

        let res = send(app(state), get("/health")).await;
        assert_eq!(res.status, StatusCode::OK);
    }
}
