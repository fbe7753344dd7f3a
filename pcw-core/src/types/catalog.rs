//! The catalog registry and cache-key derivation.
//!
//! - [`Catalog`]: The closed set of address catalogs proxied by this service
//! - [`CacheKey`]: The `prefix:fragment` key used to namespace cache entries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProxyError;

// ═══════════════════════════════════════════════════════════════════════════════
// CATALOG
// ═══════════════════════════════════════════════════════════════════════════════

/// An address catalog proxied by this service.
///
/// Each catalog carries a short, immutable prefix that doubles as the route
/// segment (`/pcw/:api_key/address/{prefix}/:fragment`) and the cache-key
/// namespace. Prefixes are pairwise non-overlapping under `prefix:fragment`
/// concatenation, so two catalogs can never read each other's entries.
///
/// Adding a catalog is an edit here, not a pipeline change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Catalog {
    /// Irish Eircode catalog.
    Eircode,
    /// UK premise catalog.
    Premise,
}

impl Catalog {
    /// All supported catalogs, in route-registration order.
    pub const ALL: [Catalog; 2] = [Catalog::Eircode, Catalog::Premise];

    /// The cache-key prefix and route segment for this catalog.
    pub const fn prefix(&self) -> &'static str {
        match self {
            Catalog::Eircode => "ie",
            Catalog::Premise => "uk",
        }
    }

    /// Resolves a route segment to a catalog.
    ///
    /// Returns `None` for unknown segments; the HTTP layer registers no
    /// route for those, so they 404 before any pipeline work happens.
    pub fn resolve(segment: &str) -> Option<Catalog> {
        Self::ALL.iter().copied().find(|c| c.prefix() == segment)
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for Catalog {
    type Err = ProxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Catalog::resolve(s)
            .ok_or_else(|| ProxyError::Validation(format!("unknown catalog: {s}")))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE KEY
// ═══════════════════════════════════════════════════════════════════════════════

/// A cache key derived from a catalog and a query fragment.
///
/// Pure function of its inputs: identical `(catalog, fragment)` pairs always
/// produce identical keys, and distinct catalogs never collide even for the
/// same fragment. The key has no identity of its own beyond the string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Builds the key as `prefix:fragment`.
    pub fn new(catalog: Catalog, fragment: &str) -> Self {
        Self(format!("{}:{}", catalog.prefix(), fragment))
    }

    /// The key as a string slice, as sent to the cache store.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
