//! Route configuration.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Creates the proxy router.
///
/// One route per supported catalog, like the provider's own surface;
/// country segments outside the registry match no route and 404 at the
/// framework level.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/pcw/:api_key/address/ie/:fragment",
            get(handlers::lookup_eircode),
        )
        .route(
            "/pcw/:api_key/address/uk/:fragment",
            get(handlers::lookup_premise),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use bytes::Bytes;
    use tower::ServiceExt;

    use pcw_cache::MemoryCache;
    use pcw_core::{
        AddressCache, AddressProvider, CacheKey, Catalog, ProviderReply, ProxyError, Result,
    };

    /// Provider fake with a fixed reply.
    struct StaticProvider {
        status: u16,
        body: &'static [u8],
    }

    #[async_trait]
    impl AddressProvider for StaticProvider {
        async fn fetch(
            &self,
            _catalog: Catalog,
            _api_key: &str,
            _fragment: &str,
        ) -> Result<ProviderReply> {
            Ok(ProviderReply {
                status: self.status,
                body: Bytes::from_static(self.body),
            })
        }
    }

    /// Cache fake that always fails.
    struct BrokenCache;

    #[async_trait]
    impl AddressCache for BrokenCache {
        async fn get(&self, _key: &CacheKey) -> Result<Option<Bytes>> {
            Err(ProxyError::CacheUnavailable("connection refused".into()))
        }
        async fn put(&self, _key: &CacheKey, _payload: Bytes) -> Result<()> {
            Err(ProxyError::CacheUnavailable("connection refused".into()))
        }
    }

    fn app(cache: Arc<dyn AddressCache>, provider: Arc<dyn AddressProvider>) -> Router {
        create_router(Arc::new(AppState::new(cache, provider)))
    }

    async fn get_uri(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(
            Arc::new(MemoryCache::new()),
            Arc::new(StaticProvider { status: 200, body: b"[]" }),
        );

        let response = get_uri(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cached_entry_served_verbatim() {
        let cache = Arc::new(MemoryCache::new());
        let key = CacheKey::new(Catalog::Eircode, "D02X285");
        cache.put(&key, Bytes::from_static(b"[\"stored\"]")).await.unwrap();

        let app = app(cache, Arc::new(StaticProvider { status: 200, body: b"[\"fresh\"]" }));
        let response = get_uri(app, "/pcw/key-1/address/ie/D02X285").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        assert_eq!(body_bytes(response).await.as_ref(), b"[\"stored\"]");
    }

    #[tokio::test]
    async fn test_miss_serves_upstream_payload() {
        let app = app(
            Arc::new(MemoryCache::new()),
            Arc::new(StaticProvider { status: 200, body: b"[\"fresh\"]" }),
        );

        let response = get_uri(app, "/pcw/key-1/address/uk/SW1A?format=json").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await.as_ref(), b"[\"fresh\"]");
    }

    #[tokio::test]
    async fn test_blank_api_key_is_400_with_exact_body() {
        let app = app(
            Arc::new(MemoryCache::new()),
            Arc::new(StaticProvider { status: 200, body: b"[]" }),
        );

        let response = get_uri(app, "/pcw/%20/address/ie/D02").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["code"], 400);
        assert_eq!(json["message"], "Bad Request");
    }

    #[tokio::test]
    async fn test_blank_fragment_is_400() {
        let app = app(
            Arc::new(MemoryCache::new()),
            Arc::new(StaticProvider { status: 200, body: b"[]" }),
        );

        let response = get_uri(app, "/pcw/key-1/address/ie/%20").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upstream_rejection_relayed() {
        let app = app(
            Arc::new(MemoryCache::new()),
            Arc::new(StaticProvider { status: 503, body: b"maintenance" }),
        );

        let response = get_uri(app, "/pcw/key-1/address/ie/D02").await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_bytes(response).await.as_ref(), b"maintenance");
    }

    #[tokio::test]
    async fn test_broken_cache_is_500_with_exact_body() {
        let app = app(
            Arc::new(BrokenCache),
            Arc::new(StaticProvider { status: 200, body: b"[]" }),
        );

        let response = get_uri(app, "/pcw/key-1/address/ie/D02").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["code"], 500);
        assert_eq!(json["message"], "Internal Server Error");
    }

    #[tokio::test]
    async fn test_unknown_country_is_404() {
        let app = app(
            Arc::new(MemoryCache::new()),
            Arc::new(StaticProvider { status: 200, body: b"[]" }),
        );

        let response = get_uri(app, "/pcw/key-1/address/fr/75001").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
