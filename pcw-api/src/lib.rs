//! # PCW API
//!
//! HTTP surface of the address-lookup proxy.
//!
//! ## Endpoints
//!
//! - `GET /pcw/:api_key/address/ie/:fragment` - Irish Eircode lookups
//! - `GET /pcw/:api_key/address/uk/:fragment` - UK premise lookups
//! - `GET /health` - liveness
//!
//! ## Example
//!
//! ```rust,ignore
//! use pcw_api::{ApiConfig, ApiServer};
//!
//! let config = ApiConfig::from_env();
//! let server = ApiServer::connect(&config).await?;
//! server.run(([0, 0, 0, 0], config.http_port)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{ApiConfig, AppState};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use pcw_cache::RedisCache;
use pcw_core::{AddressCache, AddressProvider, Result};
use pcw_upstream::HttpAddressProvider;

/// The proxy server.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a server over already-constructed adapters.
    pub fn new(cache: Arc<dyn AddressCache>, provider: Arc<dyn AddressProvider>) -> Self {
        Self {
            state: Arc::new(AppState::new(cache, provider)),
        }
    }

    /// Connects the production adapters (Redis, upstream HTTP) and creates
    /// the server.
    pub async fn connect(config: &ApiConfig) -> Result<Self> {
        let cache = RedisCache::connect(&config.redis).await?;
        let provider = HttpAddressProvider::with_config(config.upstream.clone());
        Ok(Self::new(Arc::new(cache), Arc::new(provider)))
    }

    /// Creates the router with all routes configured.
    pub fn router(&self) -> Router {
        create_router(self.state.clone()).layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("proxy server listening on {}", addr);

        axum::serve(listener, self.router()).await
    }
}
