//! Domain types for the PCW proxy.
//!
//! This module provides the data model the pipeline is built around:
//!
//! - [`Catalog`]: The closed set of proxied address catalogs
//! - [`CacheKey`]: Deterministic cache key derived from catalog + fragment
//! - [`LookupRequest`]: A validated inbound lookup
//! - [`LookupOutcome`]: The single terminal result of a lookup

mod catalog;
mod outcome;
mod request;

pub use catalog::*;
pub use outcome::*;
pub use request::*;
