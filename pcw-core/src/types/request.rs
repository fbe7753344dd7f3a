//! The validated inbound lookup request.

use crate::error::{ProxyError, Result};
use crate::types::{CacheKey, Catalog};

/// A validated address lookup, built once per inbound request.
///
/// Construction enforces the pipeline's precondition: `fragment` and
/// `api_key` are non-empty. The orchestrator assumes this and performs no
/// further validation of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupRequest {
    /// Catalog the query targets.
    pub catalog: Catalog,
    /// Partial query string, e.g. a postcode prefix.
    pub fragment: String,
    /// Client authentication token, passed through to upstream.
    pub api_key: String,
}

impl LookupRequest {
    /// Creates a validated request.
    ///
    /// Returns [`ProxyError::Validation`] when `fragment` or `api_key` is
    /// empty; the transport layer maps that to a 400 before the pipeline
    /// does any cache or upstream work.
    pub fn new(
        catalog: Catalog,
        fragment: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        let fragment = fragment.into();
        let api_key = api_key.into();

        if api_key.is_empty() {
            return Err(ProxyError::Validation("api_key must not be empty".into()));
        }
        if fragment.is_empty() {
            return Err(ProxyError::Validation("fragment must not be empty".into()));
        }

        Ok(Self {
            catalog,
            fragment,
            api_key,
        })
    }

    /// The cache key this request reads and writes.
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(self.catalog, &self.fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let req = LookupRequest::new(Catalog::Eircode, "D02", "key-1").unwrap();
        assert_eq!(req.catalog, Catalog::Eircode);
        assert_eq!(req.cache_key().as_str(), "ie:D02");
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let err = LookupRequest::new(Catalog::Eircode, "D02", "").unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_empty_fragment_rejected() {
        let err = LookupRequest::new(Catalog::Premise, "", "key-1").unwrap_err();
        assert!(err.is_validation_error());
    }
}
