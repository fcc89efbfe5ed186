//! Placeholder pipeline stages.
//!
//! Neither stage has learned behaviour; they only give the inference
//! endpoint a realistic shape.

use serde_json::{Map, Number, Value};

use crate::domain::{DomainError, Predictor, Preprocessor, Record};

/// Prefixes every field name and multiplies numeric values by a factor.
///
/// Booleans are scaled as the integers 0 and 1.
#[derive(Debug, Clone)]
pub struct ScalingPreprocessor {
    factor: i64,
    prefix: String,
}

impl Default for ScalingPreprocessor {
    fn default() -> Self {
        Self {
            factor: 10,
            prefix: "processed_".to_string(),
        }
    }
}

impl ScalingPreprocessor {
    fn process_record(&self, record: Record) -> Result<Record, DomainError> {
        let Value::Object(fields) = record else {
            return Ok(record);
        };

        let mut processed = Map::with_capacity(fields.len());

        for (name, value) in fields {
            let value = match value {
                Value::Number(number) => Value::Number(self.scale(&name, &number)?),
                Value::Bool(flag) => {
                    Value::Number(self.scale(&name, &Number::from(i64::from(flag)))?)
                }
                other => other,
            };
            processed.insert(format!("{}{}", self.prefix, name), value);
        }

        Ok(Value::Object(processed))
    }

    /// Integers stay integral unless the product overflows
    fn scale(&self, field: &str, number: &Number) -> Result<Number, DomainError> {
        if let Some(product) = number.as_i64().and_then(|n| n.checked_mul(self.factor)) {
            return Ok(product.into());
        }

        if let Some(product) = number
            .as_u64()
            .zip(u64::try_from(self.factor).ok())
            .and_then(|(n, factor)| n.checked_mul(factor))
        {
            return Ok(product.into());
        }

        let product = number.as_f64().unwrap_or(f64::NAN) * self.factor as f64;

        Number::from_f64(product).ok_or_else(|| {
            DomainError::inference(format!(
                "scaled value of field '{}' is not a finite number",
                field
            ))
        })
    }
}

impl Preprocessor for ScalingPreprocessor {
    fn preprocess(&self, records: Vec<Record>) -> Result<Vec<Record>, DomainError> {
        records
            .into_iter()
            .map(|record| self.process_record(record))
            .collect()
    }

    fn name(&self) -> &'static str {
        "scaling_preprocessor"
    }
}

/// Scores a record with the mean of its numeric fields
#[derive(Debug, Clone)]
pub struct MeanPredictor {
    default_score: f64,
}

impl Default for MeanPredictor {
    fn default() -> Self {
        Self { default_score: 0.5 }
    }
}

impl MeanPredictor {
    fn score(&self, record: &Record) -> Result<f64, DomainError> {
        let Some(fields) = record.as_object() else {
            return Ok(self.default_score);
        };

        let numeric: Vec<f64> = fields.values().filter_map(numeric_value).collect();

        if numeric.is_empty() {
            return Ok(self.default_score);
        }

        let mean = numeric.iter().sum::<f64>() / numeric.len() as f64;

        if !mean.is_finite() {
            return Err(DomainError::inference("record score is not a finite number"));
        }

        Ok(mean)
    }
}

/// Booleans count as the integers 0 and 1
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    }
}

impl Predictor for MeanPredictor {
    fn predict(&self, records: &[Record]) -> Result<Vec<f64>, DomainError> {
        records.iter().map(|record| self.score(record)).collect()
    }

    fn name(&self) -> &'static str {
        "mean_predictor"
    }
}
