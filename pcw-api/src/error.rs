//! API error responses.
//!
//! The proxy's own errors always use the flat `{"code":N,"message":"..."}`
//! body. Upstream rejections never pass through here; they are relayed
//! verbatim by the response writer.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use pcw_core::{ErrorBody, ProxyError};

/// An error response emitted by this service.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// 400 for requests missing `api_key` or `fragment`.
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody::bad_request(),
        }
    }

    /// 500 for cache failures and upstream transport failures.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody::internal(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body.to_bytes(),
        )
            .into_response()
    }
}

impl From<ProxyError> for ApiError {
    fn from(err: ProxyError) -> Self {
        if err.is_validation_error() {
            ApiError::bad_request()
        } else {
            tracing::error!(error = %err, "internal error");
            ApiError::internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let api: ApiError = ProxyError::Validation("empty".into()).into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.body.code, 400);
    }

    #[test]
    fn test_cache_error_maps_to_500() {
        let api: ApiError = ProxyError::CacheUnavailable("down".into()).into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.body.code, 500);
    }
}
