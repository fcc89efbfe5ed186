//! Prediction endpoint DTOs

use serde::{Deserialize, Serialize};

use crate::domain::Record;

/// `POST /predict` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub data: Vec<Record>,
}

/// One score per input record, in input order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predictions: Vec<f64>,
    pub status: String,
}

impl PredictionResponse {
    pub fn success(predictions: Vec<f64>) -> Self {
        Self {
            predictions,
            status: "success".to_string(),
        }
    }
}
