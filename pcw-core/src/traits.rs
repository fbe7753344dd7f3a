//! Adapter traits the pipeline depends on.
//!
//! These are the two seams of the cache-aside pipeline. Production
//! implementations live in `pcw-cache` (Redis) and `pcw-upstream` (reqwest);
//! the orchestrator's unit tests substitute in-memory fakes.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;
use crate::types::{CacheKey, Catalog};

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE CLIENT
// ═══════════════════════════════════════════════════════════════════════════════

/// Asynchronous get/put against the remote key-value cache.
///
/// Implementations bound each call with their own timeout and fold
/// connection, timeout, and protocol failures into the cache variants of
/// [`crate::ProxyError`]. Retries, if any, are the implementation's own
/// resilience policy, not the pipeline's.
#[async_trait]
pub trait AddressCache: Send + Sync {
    /// Reads the payload stored under `key`.
    ///
    /// A successful call with nothing stored yields `Ok(None)`; only
    /// connectivity and protocol problems are errors.
    async fn get(&self, key: &CacheKey) -> Result<Option<Bytes>>;

    /// Stores `payload` under `key`, replacing any existing value.
    ///
    /// The orchestrator invokes this fire-and-forget: the outcome is logged
    /// and never fails the in-flight request.
    async fn put(&self, key: &CacheKey, payload: Bytes) -> Result<()>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// UPSTREAM PROVIDER
// ═══════════════════════════════════════════════════════════════════════════════

/// What the upstream provider said, status and body verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderReply {
    /// HTTP status code from upstream.
    pub status: u16,
    /// Response body, byte-for-byte.
    pub body: Bytes,
}

impl ProviderReply {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single-attempt call to the external address-lookup provider.
///
/// A non-2xx reply is a valid `Ok` outcome the pipeline must distinguish
/// from a connection-level failure; only transport problems are errors.
#[async_trait]
pub trait AddressProvider: Send + Sync {
    /// Queries the provider for addresses matching `fragment` in `catalog`.
    async fn fetch(
        &self,
        catalog: Catalog,
        api_key: &str,
        fragment: &str,
    ) -> Result<ProviderReply>;
}
