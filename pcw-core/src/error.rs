//! Error types for the PCW proxy.
//!
//! One `thiserror` hierarchy shared by every crate in the workspace. The
//! variants follow the failure taxonomy of the pipeline: validation problems
//! caught at the transport boundary, cache connectivity problems, and
//! upstream connectivity problems. A non-success HTTP reply from upstream is
//! deliberately *not* an error; it is carried as data in
//! [`crate::LookupOutcome::UpstreamError`] so the proxy stays transparent to
//! the provider's own error semantics.

use thiserror::Error;

/// Result type alias using [`ProxyError`].
pub type Result<T> = std::result::Result<T, ProxyError>;

/// Main error type for all proxy operations.
#[derive(Debug, Error)]
pub enum ProxyError {
    // ═══════════════════════════════════════════════════════════════════════════
    // VALIDATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// Input validation failed. Handled at the transport boundary and never
    /// reaches the orchestrator.
    #[error("validation error: {0}")]
    Validation(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // CACHE ERRORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// Could not reach the cache store (connection refused, DNS, broken pipe).
    #[error("cache unavailable: {0}")]
    CacheUnavailable(String),

    /// The cache call exceeded the adapter timeout.
    #[error("cache timeout after {seconds}s")]
    CacheTimeout {
        /// Configured timeout that was exceeded.
        seconds: u64,
    },

    /// The cache replied with something the adapter could not interpret.
    #[error("cache protocol error: {0}")]
    CacheProtocol(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // UPSTREAM ERRORS (transport-level only)
    // ═══════════════════════════════════════════════════════════════════════════
    /// Could not reach the upstream provider at the transport level.
    #[error("upstream request failed: {0}")]
    UpstreamUnavailable(String),

    /// The upstream call exceeded the adapter timeout.
    #[error("upstream timeout after {seconds}s")]
    UpstreamTimeout {
        /// Configured timeout that was exceeded.
        seconds: u64,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// Bad process configuration, detected at startup.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ProxyError {
    /// Returns true if this error came from the cache adapter.
    ///
    /// Cache errors are fail-stop for the in-flight request: the pipeline
    /// surfaces them instead of falling through to upstream.
    pub fn is_cache_error(&self) -> bool {
        matches!(
            self,
            ProxyError::CacheUnavailable(_)
                | ProxyError::CacheTimeout { .. }
                | ProxyError::CacheProtocol(_)
        )
    }

    /// Returns true if this error came from the upstream adapter.
    pub fn is_upstream_error(&self) -> bool {
        matches!(
            self,
            ProxyError::UpstreamUnavailable(_) | ProxyError::UpstreamTimeout { .. }
        )
    }

    /// Returns true if this is an input validation error.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, ProxyError::Validation(_))
    }
}
