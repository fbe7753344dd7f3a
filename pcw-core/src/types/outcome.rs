//! The terminal outcome of a lookup and the wire error-body shape.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// The single terminal result of one pipeline run.
///
/// Produced exactly once per [`crate::LookupRequest`] and consumed exactly
/// once by the response writer. Payloads are the upstream provider's response
/// body verbatim; the proxy never parses them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The cache held a value for the key. No upstream call was made.
    Hit(Bytes),
    /// The cache was empty; upstream replied successfully and the payload is
    /// being written back to the cache in the background.
    Fetched(Bytes),
    /// Upstream replied with a non-success status, or could not be reached
    /// at all (then `status` is a synthesized 500).
    UpstreamError {
        /// HTTP status to relay to the client.
        status: u16,
        /// Upstream's own body, unmodified, or a synthesized error body.
        body: Bytes,
    },
    /// The cache could not be consulted. Fail-stop: upstream was never
    /// called, so a broken cache stays visible instead of silently shifting
    /// load onto the provider.
    CacheError(String),
}

impl LookupOutcome {
    /// The payload for successful outcomes, if any.
    pub fn payload(&self) -> Option<&Bytes> {
        match self {
            LookupOutcome::Hit(p) | LookupOutcome::Fetched(p) => Some(p),
            _ => None,
        }
    }

    /// Returns true if this lookup was served from the cache.
    pub fn is_hit(&self) -> bool {
        matches!(self, LookupOutcome::Hit(_))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// WIRE ERROR BODY
// ═══════════════════════════════════════════════════════════════════════════════

/// The JSON error body this service emits: `{"code":N,"message":"..."}`.
///
/// Used for validator 400s, cache-failure 500s, and the body synthesized
/// when upstream cannot be reached at the transport level. Genuine upstream
/// rejections are relayed with upstream's own body instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body.
    pub code: u16,
    /// Canonical reason phrase.
    pub message: String,
}

impl ErrorBody {
    /// The 400 body for requests missing `api_key` or `fragment`.
    pub fn bad_request() -> Self {
        Self {
            code: 400,
            message: "Bad Request".into(),
        }
    }

    /// The 500 body for cache failures and upstream transport failures.
    pub fn internal() -> Self {
        Self {
            code: 500,
            message: "Internal Server Error".into(),
        }
    }

    /// Serializes the body to bytes.
    pub fn to_bytes(&self) -> Bytes {
        // Two scalar fields; serialization cannot fail.
        serde_json::to_vec(self)
            .expect("error body serializes")
            .into()
    }
}
