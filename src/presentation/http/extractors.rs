// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, presentation::http::state::HttpState};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Guard extractor: the request must carry the configured API key in the
/// `x-api-key` header. Handlers that include it reject with 401 otherwise.
#[derive(Debug, Clone, Copy)]
pub struct RequireApiKey;

impl<S> FromRequestParts<S> for RequireApiKey
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let presented = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::Unauthorized(
                    "missing API key header".into(),
                ))
            })?;

        if presented == app_state.api_key.as_ref() {
            Ok(Self)
        } else {
            Err(HttpError::from_error(ApplicationError::Unauthorized(
                "invalid API key".into(),
            )))
        }
    }
}
