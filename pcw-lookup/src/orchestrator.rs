//! The cache-aside pipeline.
//!
//! Strict ordering for a single request: cache `get`, then (only on a miss)
//! upstream `fetch`, then (only on upstream success) a background cache
//! `put`. There is no speculative parallel fetch and no fallback from a
//! broken cache to upstream.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use pcw_core::{
    AddressCache, AddressProvider, ErrorBody, LookupOutcome, LookupRequest,
};

/// The lookup orchestrator.
///
/// Holds the two shared, long-lived adapters; per-request state stays local
/// to each [`lookup`](Self::lookup) call, so one instance serves any number
/// of concurrent requests. Adapters are injected explicitly to keep the
/// pipeline unit-testable with fakes.
pub struct LookupService {
    cache: Arc<dyn AddressCache>,
    provider: Arc<dyn AddressProvider>,
}

impl LookupService {
    /// Creates an orchestrator over the given adapters.
    pub fn new(cache: Arc<dyn AddressCache>, provider: Arc<dyn AddressProvider>) -> Self {
        Self { cache, provider }
    }

    /// Runs the cache-aside pipeline for one validated request.
    ///
    /// Sequencing:
    /// 1. `cache.get`: a failure here is fail-stop ([`LookupOutcome::CacheError`]);
    ///    upstream is never consulted, so a broken cache stays visible
    ///    instead of silently shifting its load onto the provider.
    /// 2. A present value returns [`LookupOutcome::Hit`] with no upstream call.
    /// 3. On a miss, `provider.fetch`: transport failure becomes a
    ///    synthesized 500; a non-success reply is relayed with upstream's
    ///    exact status and body.
    /// 4. On upstream success the payload is written back with `cache.put`
    ///    on a spawned task; the response does not wait for it and its
    ///    failure is logged only. An empty body is still cached: empty is a
    ///    legitimate value, distinct from absent.
    ///
    /// Concurrent identical misses are not coalesced; each fetches upstream
    /// independently and the cache's own last-write-wins semantics settle
    /// the benign double write.
    #[instrument(skip(self, request), fields(catalog = %request.catalog, fragment = %request.fragment))]
    pub async fn lookup(&self, request: &LookupRequest) -> LookupOutcome {
        let key = request.cache_key();

        let cached = match self.cache.get(&key).await {
            Ok(cached) => cached,
            Err(e) => {
                warn!(key = %key, error = %e, "cache lookup failed");
                return LookupOutcome::CacheError(e.to_string());
            }
        };

        if let Some(payload) = cached {
            debug!(key = %key, bytes = payload.len(), "cache hit");
            return LookupOutcome::Hit(payload);
        }

        debug!(key = %key, "cache miss, querying upstream");

        let reply = match self
            .provider
            .fetch(request.catalog, &request.api_key, &request.fragment)
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                warn!(key = %key, error = %e, "upstream fetch failed");
                return LookupOutcome::UpstreamError {
                    status: 500,
                    body: ErrorBody::internal().to_bytes(),
                };
            }
        };

        if !reply.is_success() {
            info!(key = %key, status = reply.status, "upstream rejected query");
            return LookupOutcome::UpstreamError {
                status: reply.status,
                body: reply.body,
            };
        }

        // Write-through without holding up the response. The spawned put is
        // bounded by the adapter's own timeout.
        let cache = Arc::clone(&self.cache);
        let payload = reply.body.clone();
        tokio::spawn(async move {
            if let Err(e) = cache.put(&key, payload).await {
                warn!(key = %key, error = %e, "background cache write failed");
            } else {
                debug!(key = %key, "cached upstream reply");
            }
        });

        LookupOutcome::Fetched(reply.body)
    }
}
