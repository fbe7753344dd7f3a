//! The mock provider HTTP service.

use std::net::SocketAddr;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use pcw_core::Catalog;

use crate::address::random_addresses;

/// Builds the mock provider router.
///
/// Serves `GET /pcw/:api_key/address/:country/:fragment`; unknown country
/// segments get a 404. Any api_key is accepted; this is a fixture, not an
/// authenticator.
pub fn mock_router() -> Router {
    Router::new()
        .route(
            "/pcw/:api_key/address/:country/:fragment",
            get(handle_lookup),
        )
        .layer(TraceLayer::new_for_http())
}

async fn handle_lookup(
    Path((_api_key, country, fragment)): Path<(String, String, String)>,
) -> impl IntoResponse {
    let Some(catalog) = Catalog::resolve(&country) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let records = random_addresses(&mut rand::thread_rng(), catalog, &fragment);
    debug!(%catalog, fragment, count = records.len(), "serving mock addresses");

    Json(records).into_response()
}

/// The runnable mock provider.
pub struct MockProvider;

impl MockProvider {
    /// Runs the mock provider on the given address.
    pub async fn run(addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("mock provider listening on {}", addr);

        axum::serve(listener, mock_router()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_lookup_returns_array() {
        let app = mock_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/pcw/any-key/address/ie/D02X285")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let records = json.as_array().unwrap();
        assert!(!records.is_empty());
        assert!(records[0]["postcode"].as_str().unwrap().starts_with("D02X285"));
    }

    #[tokio::test]
    async fn test_unknown_country_is_404() {
        let app = mock_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/pcw/any-key/address/fr/75001")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
