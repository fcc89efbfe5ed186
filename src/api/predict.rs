//! Inference endpoint

use std::time::Instant;

use tracing::{error, info};

use super::middleware::RequireInference;
use super::types::{ApiError, Json, PredictionRequest, PredictionResponse};
use crate::infrastructure::observability::record_prediction;

/// POST /predict
///
/// Availability is checked by [`RequireInference`] before the body is read.
pub async fn predict(
    RequireInference(pipeline): RequireInference,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let start = Instant::now();
    let records = request.data.len();

    info!(records, "Prediction requested");

    match pipeline.run(request.data) {
        Ok(predictions) => {
            record_prediction(records, true, start.elapsed());
            Ok(Json(PredictionResponse::success(predictions)))
        }
        Err(e) => {
            error!(error = %e, records, "Prediction failed");
            record_prediction(records, false, start.elapsed());
            Err(ApiError::internal(format!(
                "An error occurred during AI prediction: {}",
                e
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::{Request, StatusCode}};
    use serde_json::json;

    use crate::api::middleware::inference::{INFERENCE_DISABLED, INFERENCE_UNAVAILABLE};
    use crate::api::test_support::{app, post_json, ready_state, send, state_with};
    use crate::domain::{DomainError, InferencePipeline, InferenceState, Predictor, Record};
    use crate::infrastructure::inference::ScalingPreprocessor;

    #[tokio::test]
    async fn test_predict_end_to_end() {
        let res = send(
            app(ready_state()),
            post_json("/predict", r#"{"data": [{"feature1": 10, "feature2": 20}]}"#),
        )
        .await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["predictions"], json!([150.0]));
        assert_eq!(res.body["status"], "success");
    }

    #[tokio::test]
    async fn test_predict_keeps_input_order() {
        let res = send(
            app(ready_state()),
            post_json(
                "/predict",
                r#"{"data": [{"a": 1}, {"name": "x"}, {"a": 1, "b": 2}, 5]}"#,
            ),
        )
        .await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["predictions"], json!([10.0, 0.5, 15.0, 0.5]));
    }

    #[tokio::test]
    async fn test_predict_treats_booleans_as_integers() {
        let res = send(
            app(ready_state()),
            post_json("/predict", r#"{"data": [{"a": true}, {"x": true, "y": 2}]}"#),
        )
        .await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["predictions"], json!([10.0, 15.0]));
    }

    #[tokio::test]
    async fn test_predict_empty_list() {
        let res = send(app(ready_state()), post_json("/predict", r#"{"data": []}"#)).await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["predictions"], json!([]));
    }

    #[tokio::test]
    async fn test_disabled_is_forbidden_regardless_of_body() {
        let bodies = [
            r#"{"data": [{"feature1": 10}]}"#,
            r#"{"data": []}"#,
            r#"{"wrong": true}"#,
            "not json at all",
        ];

        for body in bodies {
            let res = send(
                app(state_with(InferenceState::Disabled)),
                post_json("/predict", body),
            )
            .await;

            assert_eq!(res.status, StatusCode::FORBIDDEN, "{}", body);
            assert_eq!(res.body["error"]["message"], INFERENCE_DISABLED);
        }
    }

    #[tokio::test]
    async fn test_disabled_without_content_type_is_forbidden() {
        let request = Request::builder()
            .method("POST")
            .uri("/predict")
            .body(Body::empty())
            .unwrap();

        let res = send(app(state_with(InferenceState::Disabled)), request).await;
        assert_eq!(res.status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unavailable_is_503() {
        let state = state_with(InferenceState::Unavailable {
            reason: "model artifact 'model.pkl' not found".to_string(),
        });

        let res = send(app(state), post_json("/predict", r#"{"data": []}"#)).await;

        assert_eq!(res.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(res.body["error"]["type"], "service_unavailable_error");
        assert_eq!(res.body["error"]["message"], INFERENCE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_pipeline_failure_is_500() {
        let res = send(
            app(ready_state()),
            post_json("/predict", r#"{"data": [{"huge": 1e308}]}"#),
        )
        .await;

        assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = res.body["error"]["message"].as_str().unwrap();
        assert!(message.starts_with("An error occurred during AI prediction:"));
        assert!(message.contains("huge"));
    }

    #[derive(Debug)]
    struct BrokenPredictor;

    impl Predictor for BrokenPredictor {
        fn predict(&self, _records: &[Record]) -> Result<Vec<f64>, DomainError> {
            Err(DomainError::internal("model exploded"))
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    #[tokio::test]
    async fn test_pipeline_is_substitutable() {
        let pipeline = InferencePipeline::new(
            Arc::new(ScalingPreprocessor::default()),
            Arc::new(BrokenPredictor),
        );

        let res = send(
            app(state_with(InferenceState::Ready(pipeline))),
            post_json("/predict", r#"{"data": [{"a": 1}]}"#),
        )
        .await;

        assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            res.body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("model exploded")
        );
    }

    #[tokio::test]
    async fn test_malformed_body_when_ready() {
        let res = send(app(ready_state()), post_json("/predict", r#"{"data": 3}"#)).await;
        assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(res.body["error"]["code"], "json_parse_error");

        let res = send(app(ready_state()), post_json("/predict", "{oops")).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
    }
}
