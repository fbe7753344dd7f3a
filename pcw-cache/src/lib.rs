//! # PCW Cache
//!
//! Redis-backed implementation of the [`pcw_core::AddressCache`] contract.
//!
//! Entries are keyed `prefix:fragment` and hold the upstream response body
//! verbatim. No TTL is set here; expiry is the cache store's own
//! configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod memory;
mod redis_cache;

pub use memory::MemoryCache;
pub use redis_cache::{RedisCache, RedisCacheConfig};
