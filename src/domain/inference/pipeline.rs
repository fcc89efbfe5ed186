use std::fmt::Debug;
use std::sync::Arc;

use tracing::debug;

use super::Record;
use crate::domain::DomainError;

/// First pipeline stage: rewrites each record's fields
pub trait Preprocessor: Send + Sync + Debug {
    fn preprocess(&self, records: Vec<Record>) -> Result<Vec<Record>, DomainError>;

    fn name(&self) -> &'static str;
}

/// Second pipeline stage: derives one score per record
pub trait Predictor: Send + Sync + Debug {
    fn predict(&self, records: &[Record]) -> Result<Vec<f64>, DomainError>;

    fn name(&self) -> &'static str;
}

/// `predict(preprocess(records))`, one score per input record in input order
#[derive(Debug, Clone)]
pub struct InferencePipeline {
    preprocessor: Arc<dyn Preprocessor>,
    predictor: Arc<dyn Predictor>,
}

impl InferencePipeline {
    pub fn new(preprocessor: Arc<dyn Preprocessor>, predictor: Arc<dyn Predictor>) -> Self {
        Self {
            preprocessor,
            predictor,
        }
    }

    pub fn run(&self, records: Vec<Record>) -> Result<Vec<f64>, DomainError> {
        let expected = records.len();

        debug!(
            records = expected,
            preprocessor = self.preprocessor.name(),
            "Preprocessing records"
        );
        let processed = self.preprocessor.preprocess(records)?;

        debug!(
            records = processed.len(),
            predictor = self.predictor.name(),
            "Scoring records"
        );
        let scores = self.predictor.predict(&processed)?;

        if scores.len() != expected {
            return Err(DomainError::internal(format!(
                "predictor returned {} scores for {} records",
                scores.len(),
                expected
            )));
        }

        Ok(scores)
    }

    pub fn describe(&self) -> String {
        format!("{} -> {}", self.preprocessor.name(), self.predictor.name())
    }
}
