//! Path extractor whose rejections use the API error format

use axum::{
    extract::{FromRequestParts, RawPathParams},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Wrapper around `axum::extract::Path` reporting unparsable segments as [`ApiError`]
#[derive(Debug, Clone, Copy)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let rejection = match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => return Ok(Path(value)),
            Err(rejection) => rejection,
        };

        let mut error = ApiError::from_rejection(
            rejection.status(),
            format!("Invalid path parameter: {}", rejection.body_text()),
        )
        .with_code("invalid_path_parameter");

        if let Some(param) = single_param_name(parts, state).await {
            error = error.with_param(param);
        }

        Err(error)
    }
}

/// Name of the route's only path parameter, if it has exactly one
async fn single_param_name<S: Send + Sync>(parts: &mut Parts, state: &S) -> Option<String> {
    let params = RawPathParams::from_request_parts(parts, state).await.ok()?;
    let mut keys = params.iter().map(|(key, _)| key.to_string());

    match (keys.next(), keys.next()) {
        (Some(key), None) => Some(key),
        _ => None,
    }
}
